//! Square proofs: a commitment hides a perfect square.

use num_bigint::BigInt;

use super::{EqualityStatement, SquareProof};
use crate::Result;

/// Verifies that `target` commits to the square of the value committed by
/// `proof.commitment`.
///
/// With `F = proof.commitment`, this is the equality-constraint check on
/// `F = g^x * h^r1` and `target = F^x * h^r2`: the same `x` is the exponent of
/// `g` in `F` and of `F` in `target`, so `target` hides `x^2`.
///
/// # Errors
///
/// Fails exactly when the embedded equality-constraint proof fails.
pub fn verify_square(
    modulus: &BigInt,
    g: &BigInt,
    h: &BigInt,
    target: &BigInt,
    proof: &SquareProof,
) -> Result<()> {
    let root = &proof.commitment;
    let statement = EqualityStatement {
        g1: g,
        h1: h,
        g2: root,
        h2: h,
        e: root,
        f: target,
    };
    statement.verify(modulus, &proof.equality)
}
