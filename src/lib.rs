//! Verification of zero-knowledge range proofs over hidden-order groups.
//!
//! A prover commits to an integer `m` as `c = g^m * h^r mod N` and proves,
//! without revealing `m`, that `a <= m <= b` for a public range `[a, b]`. The
//! proof is made non-interactive with the Fiat-Shamir transform over SHA-256.
//!
//! - **primitives**: modular arithmetic, the challenge hash, log formatting
//! - **protocol**: proof data model and the equality and square sub-verifiers
//! - **verifier**: the range-proof verifier, [`validate`], and configuration
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//!
//! let commitment: Vec<BigInt> = vec![5.into(), 23.into(), 4.into(), 9.into()];
//! let proof: Vec<BigInt> = vec![BigInt::from(1); 22];
//!
//! // A proof that does not open the commitment is rejected.
//! assert!(!range_proof_zkp::validate(
//!     &BigInt::from(0),
//!     &BigInt::from(10),
//!     &commitment,
//!     &proof,
//! ));
//! ```

/// Error types.
pub mod error;
/// Arithmetic and hashing building blocks.
pub mod primitives;
/// Proof data model and sub-protocol verifiers.
pub mod protocol;
/// Range-proof verification.
pub mod verifier;

pub use error::{Check, Error, Result};
pub use primitives::{challenge_hash, range_challenge, K1};
pub use protocol::{
    verify_square, ClosedRange, Commitment, EqualityProof, EqualityStatement, RangeProof,
    SecretOrderGroup, SquareProof,
};
#[cfg(feature = "config")]
pub use verifier::VerifierConfig;
pub use verifier::{validate, RangeVerifier};
