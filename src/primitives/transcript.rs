//! Fiat-Shamir challenge derivation.
//!
//! Challenges are SHA-256 digests over the big-endian, minimal-length, unsigned
//! encoding of one or two integers, read back as an unsigned integer. The
//! encoding must match the prover's byte for byte.

use std::sync::LazyLock;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::One;
use sha2::{Digest, Sha256};

/// Bit length of the range-proof security parameter `k1`.
pub const CHALLENGE_BITS: usize = 160;

/// Security parameter `k1 = 2^160`, shared with the prover.
///
/// Range challenges `s` and `t` are reduced modulo this value.
pub static K1: LazyLock<BigInt> = LazyLock::new(|| BigInt::one() << CHALLENGE_BITS);

/// Incremental SHA-256 hasher over integers.
///
/// Each appended integer contributes its unsigned big-endian magnitude with no
/// sign byte and no length prefix; zero contributes the single byte `0x00`.
/// Inputs are residues modulo a positive modulus, so they are never negative.
#[derive(Clone, Default)]
pub struct ChallengeHasher(Sha256);

impl ChallengeHasher {
    /// Creates an empty hasher.
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    /// Appends the magnitude of `value` to the hash input.
    pub fn append(&mut self, value: &BigInt) {
        self.0.update(value.magnitude().to_bytes_be());
    }

    /// Consumes the hasher and returns the digest as a non-negative integer.
    pub fn finalize(self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.0.finalize())
    }
}

/// Hashes one or two integers into a challenge.
///
/// Order matters: `challenge_hash(a, Some(b))` and `challenge_hash(b, Some(a))`
/// differ, as do `challenge_hash(a, None)` and `challenge_hash(a, Some(b))`.
pub fn challenge_hash(first: &BigInt, second: Option<&BigInt>) -> BigInt {
    let mut hasher = ChallengeHasher::new();
    hasher.append(first);
    if let Some(second) = second {
        hasher.append(second);
    }
    hasher.finalize()
}

/// Derives a range challenge `(H(value) mod k1) + 1`.
///
/// The result lies in `[1, k1]`; the offset rules out a zero challenge.
pub fn range_challenge(value: &BigInt) -> BigInt {
    challenge_hash(value, None).mod_floor(&K1) + 1u8
}
