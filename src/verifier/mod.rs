//! Range-proof verifier.
//!
//! This module checks that a commitment hides a value inside a public closed
//! range, given a non-interactive proof. Verification is a flat sequence of
//! independent checks that stops at the first failure.

use std::time::Instant;

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::{debug, debug_span, trace};

use crate::error::Check;
use crate::primitives::{mod_inverse, mod_pow, mod_product, range_challenge, ShortInt};
use crate::protocol::{verify_square, EqualityStatement};
use crate::{ClosedRange, Commitment, Error, RangeProof, Result};

#[cfg(feature = "config")]
/// Verifier configuration loading.
pub mod config;

#[cfg(feature = "config")]
pub use config::VerifierConfig;

/// Verifier for range proofs over a hidden-order group.
///
/// Holds the public range; the group travels with each [`Commitment`].
/// The group is taken as given: it must come from a trusted setup, since
/// a degenerate modulus such as `N = 1` satisfies every check.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use range_proof_zkp::{ClosedRange, RangeVerifier};
///
/// let verifier = RangeVerifier::new(ClosedRange::new(BigInt::from(18), BigInt::from(65)));
/// assert_eq!(verifier.range().to_string(), "[18, 65]");
/// ```
#[derive(Clone, Debug)]
pub struct RangeVerifier {
    range: ClosedRange,
}

impl RangeVerifier {
    /// Creates a verifier for `range`.
    pub fn new(range: ClosedRange) -> Self {
        Self { range }
    }

    /// Returns the range proofs are checked against.
    pub fn range(&self) -> &ClosedRange {
        &self.range
    }

    /// Verifies that `commitment` hides a value in the range.
    ///
    /// Returns `Ok(())` if the proof is valid, `Err` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] naming the first check that
    /// rejected the proof. Arithmetic failures such as a non-invertible
    /// commitment are reported as a failure of the step that hit them.
    pub fn verify(&self, commitment: &Commitment, proof: &RangeProof) -> Result<()> {
        let span = debug_span!(
            "verify_range_proof",
            range = %self.range,
            modulus = %ShortInt::new(commitment.group().modulus())
        );
        let _enter = span.enter();
        let started = Instant::now();

        let result = self.run_checks(commitment, proof);
        match &result {
            Ok(()) => debug!("range proof accepted"),
            Err(err) => debug!(%err, "range proof rejected"),
        }
        trace!(elapsed = ?started.elapsed(), "verification finished");

        result
    }

    fn run_checks(&self, commitment: &Commitment, proof: &RangeProof) -> Result<()> {
        let group = commitment.group();
        let (n, g, h) = (group.modulus(), group.g(), group.h());

        let (c1, c2) = self
            .shifted_commitments(commitment)
            .map_err(rejected(Check::DerivedCommitments))?;
        let c_double_prime = mod_product(&[&proof.c_prime1, &proof.c_prime2, &proof.c_prime3], n)
            .map_err(rejected(Check::DerivedCommitments))?;

        // c2 and c' hide the same exponent b - m + 1, in bases g and c1.
        let statement = EqualityStatement {
            g1: g,
            h1: h,
            g2: &c1,
            h2: h,
            e: &c2,
            f: &proof.c_prime,
        };
        statement
            .verify(n, &proof.equality)
            .map_err(rejected(Check::EqualityConstraint))?;

        let s = range_challenge(&c1);
        let t = range_challenge(&c2);

        verify_square(n, &proof.c_prime, h, &c_double_prime, &proof.square3)
            .map_err(rejected(Check::FirstSquare))?;
        verify_square(n, g, h, &proof.c_prime3, &proof.square4)
            .map_err(rejected(Check::SecondSquare))?;

        // c'1^s * c'2 * c'3 and c'1 * c'2^t * c'3 open to (x, u) and (y, v).
        let combination_holds = |scaled: &BigInt,
                                 scalar: &BigInt,
                                 other: &BigInt,
                                 value: &BigInt,
                                 key: &BigInt|
         -> Result<bool> {
            let lhs = mod_product(&[&mod_pow(scaled, scalar, n)?, other, &proof.c_prime3], n)?;
            Ok(lhs == group.commit(value, key)?)
        };

        let holds = combination_holds(&proof.c_prime1, &s, &proof.c_prime2, &proof.x, &proof.u)
            .map_err(rejected(Check::FirstCombination))?;
        ensure(holds, Check::FirstCombination)?;

        let holds = combination_holds(&proof.c_prime2, &t, &proof.c_prime1, &proof.y, &proof.v)
            .map_err(rejected(Check::SecondCombination))?;
        ensure(holds, Check::SecondCombination)?;

        // The modular identities alone admit negative representatives.
        ensure(proof.x.is_positive(), Check::PositiveX)?;
        ensure(proof.y.is_positive(), Check::PositiveY)?;

        Ok(())
    }

    /// Derives `c1 = c / g^(a-1)` and `c2 = g^(b+1) / c`.
    ///
    /// `c1` commits to `m - a + 1` and `c2` to `b - m + 1`; both are positive
    /// exactly when `m` lies in `[a, b]`.
    fn shifted_commitments(&self, commitment: &Commitment) -> Result<(BigInt, BigInt)> {
        let group = commitment.group();
        let (n, g) = (group.modulus(), group.g());
        let c = commitment.value();

        let lower_shift = mod_pow(g, &-(self.range.start() - 1u8), n)?;
        let c1 = mod_product(&[c, &lower_shift], n)?;

        let upper_shift = mod_pow(g, &(self.range.end() + 1u8), n)?;
        let c2 = mod_product(&[&upper_shift, &mod_inverse(c, n)?], n)?;

        Ok((c1, c2))
    }
}

fn ensure(holds: bool, check: Check) -> Result<()> {
    if holds {
        Ok(())
    } else {
        debug!(%check, "check failed");
        Err(Error::VerificationFailed(check))
    }
}

fn rejected(check: Check) -> impl FnOnce(Error) -> Error {
    move |err| {
        debug!(%check, cause = %err, "check failed");
        Error::VerificationFailed(check)
    }
}

/// Validates a range proof given as flat integer sequences.
///
/// `commitment` is `[c, N, g, h]` and `proof` the 22-integer layout described
/// on [`RangeProof`]. Longer sequences are accepted and their tails ignored.
///
/// Returns `true` only if the hidden value is proven to lie in
/// `[lower_limit, upper_limit]`. Malformed input, a non-positive modulus, an
/// arithmetic impossibility and every failed check all yield `false`; the
/// reason is only reported through `tracing` at debug level.
///
/// Only `N <= 0` is refused. The caller must obtain `N`, `g` and `h` from a
/// trusted setup; with `N = 1` every group element is zero and a trivial proof
/// passes for any range, even an empty one.
pub fn validate(
    lower_limit: &BigInt,
    upper_limit: &BigInt,
    commitment: &[BigInt],
    proof: &[BigInt],
) -> bool {
    let _span = debug_span!(
        "validate",
        commitment_len = commitment.len(),
        proof_len = proof.len()
    )
    .entered();

    let decoded = Commitment::from_slice(commitment)
        .and_then(|commitment| Ok((commitment, RangeProof::from_slice(proof)?)));

    match decoded {
        Ok((commitment, proof)) => {
            let range = ClosedRange::new(lower_limit.clone(), upper_limit.clone());
            RangeVerifier::new(range).verify(&commitment, &proof).is_ok()
        }
        Err(err) => {
            debug!(%err, "rejected malformed range proof input");
            false
        }
    }
}
