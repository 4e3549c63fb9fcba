//! Error types for range-proof verification.

use core::fmt;

/// Named steps of the range-proof verification.
///
/// Carried by [`Error::VerificationFailed`] so callers and logs can tell which
/// check rejected a proof. The public [`validate`](crate::validate) entry point
/// collapses every failure to `false` regardless of the step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Check {
    /// Derivation of the shifted commitments `c1`, `c2` and `c''`.
    DerivedCommitments,
    /// Equality-constraint proof binding `c1` and `c2` through `c'`.
    EqualityConstraint,
    /// Square proof that `c''` hides a square in base `c'`.
    FirstSquare,
    /// Square proof that `c'3` hides a square.
    SecondSquare,
    /// `c'1^s * c'2 * c'3 == g^x * h^u (mod N)`.
    FirstCombination,
    /// `c'1 * c'2^t * c'3 == g^y * h^v (mod N)`.
    SecondCombination,
    /// `x > 0` over the integers.
    PositiveX,
    /// `y > 0` over the integers.
    PositiveY,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DerivedCommitments => "derived commitments",
            Self::EqualityConstraint => "equality constraint",
            Self::FirstSquare => "first square",
            Self::SecondSquare => "second square",
            Self::FirstCombination => "first combination",
            Self::SecondCombination => "second combination",
            Self::PositiveX => "positive x",
            Self::PositiveY => "positive y",
        };
        f.write_str(name)
    }
}

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A commitment or proof sequence could not be decoded.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A value has no multiplicative inverse modulo the group modulus.
    #[error("Value is not invertible modulo N")]
    NotInvertible,

    /// A sub-proof challenge does not match the recomputed hash.
    #[error("Challenge does not match the recomputed hash")]
    ChallengeMismatch,

    /// A verification step rejected the proof.
    #[error("Verification failed at check: {0}")]
    VerificationFailed(Check),
}

/// Result type for range-proof operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_failure_names_the_check() {
        let err = Error::VerificationFailed(Check::SecondSquare);
        assert_eq!(err.to_string(), "Verification failed at check: second square");
    }
}
