//! Equality-constraint proofs: two commitments hide the same exponent.

use num_bigint::BigInt;
use tracing::trace;

use super::EqualityProof;
use crate::primitives::{challenge_hash, mod_pow, mod_product, ShortInt};
use crate::{Error, Result};

/// Public inputs of an equality-constraint proof.
///
/// The prover claims knowledge of `(x, r1, r2)` such that
/// `e = g1^x * h1^r1` and `f = g2^x * h2^r2 (mod N)`.
#[derive(Clone, Copy, Debug)]
pub struct EqualityStatement<'a> {
    /// Value base of the first commitment.
    pub g1: &'a BigInt,
    /// Randomness base of the first commitment.
    pub h1: &'a BigInt,
    /// Value base of the second commitment.
    pub g2: &'a BigInt,
    /// Randomness base of the second commitment.
    pub h2: &'a BigInt,
    /// First commitment `E`.
    pub e: &'a BigInt,
    /// Second commitment `F`.
    pub f: &'a BigInt,
}

impl EqualityStatement<'_> {
    /// Verifies `proof` against this statement in `Z*_modulus`.
    ///
    /// Recomputes `W1 = g1^D * h1^D1 * E^-C` and `W2 = g2^D * h2^D2 * F^-C`
    /// and checks `C == H(W1, W2)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChallengeMismatch`] if the challenge does not match, or
    /// an arithmetic error if a base is not invertible modulo `modulus`.
    pub fn verify(&self, modulus: &BigInt, proof: &EqualityProof) -> Result<()> {
        let neg_challenge = -&proof.challenge;

        let w1 = mod_product(
            &[
                &mod_pow(self.g1, &proof.d, modulus)?,
                &mod_pow(self.h1, &proof.d1, modulus)?,
                &mod_pow(self.e, &neg_challenge, modulus)?,
            ],
            modulus,
        )?;
        let w2 = mod_product(
            &[
                &mod_pow(self.g2, &proof.d, modulus)?,
                &mod_pow(self.h2, &proof.d2, modulus)?,
                &mod_pow(self.f, &neg_challenge, modulus)?,
            ],
            modulus,
        )?;

        let expected = challenge_hash(&w1, Some(&w2));
        trace!(
            w1 = %ShortInt::new(&w1),
            w2 = %ShortInt::new(&w2),
            challenge = %ShortInt::new(&proof.challenge),
            "recomputed equality commitments"
        );

        if proof.challenge != expected {
            return Err(Error::ChallengeMismatch);
        }
        Ok(())
    }

    /// Returns `true` if `proof` verifies; every failure maps to `false`.
    pub fn is_valid(&self, modulus: &BigInt, proof: &EqualityProof) -> bool {
        self.verify(modulus, proof).is_ok()
    }
}
