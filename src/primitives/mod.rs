//! Arithmetic and hashing building blocks for range-proof verification.
//!
//! - **arith**: modular arithmetic over signed big integers
//! - **transcript**: Fiat-Shamir challenge hash and the `k1` security parameter
//! - **display**: abbreviated integer formatting for diagnostics

/// Modular arithmetic primitives.
pub mod arith;
/// Abbreviated integer formatting.
pub mod display;
/// Challenge hash for the Fiat-Shamir transform.
pub mod transcript;

pub use arith::{div_mod, mod_floor, mod_inverse, mod_pow, mod_product};
pub use display::ShortInt;
pub use transcript::{challenge_hash, range_challenge, ChallengeHasher, CHALLENGE_BITS, K1};
