//! Protocol gadgets for range-proof verification.
//!
//! This module contains the data structures exchanged with the prover: group
//! parameters, the commitment, the verified range, and the three proof types.
//! Flat integer sequences are decoded here, once, into named fields.

use core::fmt;
use core::ops::Range;

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::primitives::{mod_pow, mod_product};
use crate::{Error, Result};

/// Number of integers in a flat commitment `[c, N, g, h]`.
pub const COMMITMENT_LEN: usize = 4;

/// Number of integers in a flat equality-constraint proof `[C, D, D1, D2]`.
pub const EQUALITY_PROOF_LEN: usize = 4;

/// Number of integers in a flat square proof `[F, C, D, D1, D2]`.
pub const SQUARE_PROOF_LEN: usize = 1 + EQUALITY_PROOF_LEN;

/// Number of integers in a flat range proof.
pub const RANGE_PROOF_LEN: usize = 22;

const SQUARE3: Range<usize> = 4..9;
const SQUARE4: Range<usize> = 9..14;
const EQUALITY: Range<usize> = 14..18;
const U: usize = 18;
const V: usize = 19;
const X: usize = 20;
const Y: usize = 21;

fn require_len(kind: &str, values: &[BigInt], len: usize) -> Result<()> {
    if values.len() < len {
        return Err(Error::MalformedInput(format!(
            "{kind} needs {len} integers, got {}",
            values.len()
        )));
    }
    Ok(())
}

/// Serde adapter encoding integers as decimal strings.
///
/// Deserialization also accepts plain integers, so small values may be written
/// unquoted in configuration files and environment variables.
pub(crate) mod decimal {
    use core::fmt;
    use core::result::Result;

    use num_bigint::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a decimal integer string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(with = "decimal")]
    modulus: BigInt,
    #[serde(with = "decimal")]
    g: BigInt,
    #[serde(with = "decimal")]
    h: BigInt,
}

impl TryFrom<RawGroup> for SecretOrderGroup {
    type Error = Error;

    fn try_from(raw: RawGroup) -> Result<Self> {
        Self::new(raw.modulus, raw.g, raw.h)
    }
}

/// Public parameters of the hidden-order group `Z*_N`.
///
/// The verifier never learns the factorization of `N`; `g` and `h` are
/// generators whose relative discrete logarithm is unknown to the prover.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup")]
pub struct SecretOrderGroup {
    #[serde(with = "decimal")]
    modulus: BigInt,
    #[serde(with = "decimal")]
    g: BigInt,
    #[serde(with = "decimal")]
    h: BigInt,
}

impl SecretOrderGroup {
    /// Creates group parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the modulus is not positive.
    pub fn new(modulus: BigInt, g: BigInt, h: BigInt) -> Result<Self> {
        if !modulus.is_positive() {
            return Err(Error::InvalidParams(format!(
                "modulus must be positive, got {modulus}"
            )));
        }
        Ok(Self { modulus, g, h })
    }

    /// Returns the modulus `N`.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Returns the generator `g`.
    pub fn g(&self) -> &BigInt {
        &self.g
    }

    /// Returns the generator `h`.
    pub fn h(&self) -> &BigInt {
        &self.h
    }

    /// Computes the commitment `g^value * h^key mod N`.
    ///
    /// # Errors
    ///
    /// Fails if a negative exponent meets a generator that is not invertible.
    pub fn commit(&self, value: &BigInt, key: &BigInt) -> Result<BigInt> {
        mod_product(
            &[
                &mod_pow(&self.g, value, &self.modulus)?,
                &mod_pow(&self.h, key, &self.modulus)?,
            ],
            &self.modulus,
        )
    }
}

/// Pedersen-style commitment `c = g^m * h^r mod N` together with its group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    group: SecretOrderGroup,
    #[serde(with = "decimal")]
    value: BigInt,
}

impl Commitment {
    /// Wraps a commitment value produced under `group`.
    pub fn new(group: SecretOrderGroup, value: BigInt) -> Self {
        Self { group, value }
    }

    /// Decodes the flat sequence `[c, N, g, h]`.
    ///
    /// Trailing integers beyond the fourth are ignored.
    ///
    /// # Errors
    ///
    /// Fails if fewer than four integers are given or `N` is not positive.
    pub fn from_slice(values: &[BigInt]) -> Result<Self> {
        require_len("commitment", values, COMMITMENT_LEN)?;
        let group = SecretOrderGroup::new(values[1].clone(), values[2].clone(), values[3].clone())?;
        Ok(Self::new(group, values[0].clone()))
    }

    /// Encodes the commitment as `[c, N, g, h]`.
    pub fn to_vec(&self) -> Vec<BigInt> {
        vec![
            self.value.clone(),
            self.group.modulus.clone(),
            self.group.g.clone(),
            self.group.h.clone(),
        ]
    }

    /// Returns the group the commitment lives in.
    pub fn group(&self) -> &SecretOrderGroup {
        &self.group
    }

    /// Returns the commitment value `c`.
    pub fn value(&self) -> &BigInt {
        &self.value
    }
}

/// Inclusive interval `[start, end]` of integers.
///
/// A range with `start > end` is empty; it can be constructed, but no honest
/// proof exists for it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClosedRange {
    #[serde(with = "decimal")]
    start: BigInt,
    #[serde(with = "decimal")]
    end: BigInt,
}

impl ClosedRange {
    /// Creates the range `[start, end]`.
    pub fn new(start: BigInt, end: BigInt) -> Self {
        Self { start, end }
    }

    /// Returns the lower limit.
    pub fn start(&self) -> &BigInt {
        &self.start
    }

    /// Returns the upper limit.
    pub fn end(&self) -> &BigInt {
        &self.end
    }

    /// Returns `true` if `start <= value <= end`.
    pub fn contains(&self, value: &BigInt) -> bool {
        self.start <= *value && *value <= self.end
    }

    /// Returns `true` if no integer lies in the range.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for ClosedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Proof that two commitments hide the same exponent.
///
/// Shows knowledge of `(x, r1, r2)` with `E = g1^x * h1^r1` and
/// `F = g2^x * h2^r2 (mod N)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EqualityProof {
    /// Fiat-Shamir challenge `C`.
    #[serde(with = "decimal")]
    pub challenge: BigInt,
    /// Response `D` hiding the shared exponent.
    #[serde(with = "decimal")]
    pub d: BigInt,
    /// Response `D1` hiding the randomness of the first commitment.
    #[serde(with = "decimal")]
    pub d1: BigInt,
    /// Response `D2` hiding the randomness of the second commitment.
    #[serde(with = "decimal")]
    pub d2: BigInt,
}

impl EqualityProof {
    /// Decodes `[C, D, D1, D2]`.
    ///
    /// # Errors
    ///
    /// Fails if fewer than four integers are given.
    pub fn from_slice(values: &[BigInt]) -> Result<Self> {
        require_len("equality proof", values, EQUALITY_PROOF_LEN)?;
        Ok(Self {
            challenge: values[0].clone(),
            d: values[1].clone(),
            d1: values[2].clone(),
            d2: values[3].clone(),
        })
    }

    fn extend_into(&self, out: &mut Vec<BigInt>) {
        out.extend([
            self.challenge.clone(),
            self.d.clone(),
            self.d1.clone(),
            self.d2.clone(),
        ]);
    }

    /// Encodes the proof as `[C, D, D1, D2]`.
    pub fn to_vec(&self) -> Vec<BigInt> {
        let mut out = Vec::with_capacity(EQUALITY_PROOF_LEN);
        self.extend_into(&mut out);
        out
    }
}

/// Proof that a commitment hides a perfect square.
///
/// `commitment` is `F`, a commitment to the square root; the embedded
/// equality proof ties the exponent of `F` to the one used on base `F`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SquareProof {
    /// Commitment `F` to the square root.
    #[serde(with = "decimal")]
    pub commitment: BigInt,
    /// Equality proof between `F` and the squared commitment.
    pub equality: EqualityProof,
}

impl SquareProof {
    /// Decodes `[F, C, D, D1, D2]`.
    ///
    /// # Errors
    ///
    /// Fails if fewer than five integers are given.
    pub fn from_slice(values: &[BigInt]) -> Result<Self> {
        require_len("square proof", values, SQUARE_PROOF_LEN)?;
        Ok(Self {
            commitment: values[0].clone(),
            equality: EqualityProof::from_slice(&values[1..])?,
        })
    }

    fn extend_into(&self, out: &mut Vec<BigInt>) {
        out.push(self.commitment.clone());
        self.equality.extend_into(out);
    }

    /// Encodes the proof as `[F, C, D, D1, D2]`.
    pub fn to_vec(&self) -> Vec<BigInt> {
        let mut out = Vec::with_capacity(SQUARE_PROOF_LEN);
        self.extend_into(&mut out);
        out
    }
}

/// Non-interactive range proof.
///
/// The flat 22-integer layout is
/// `[c', c'1, c'2, c'3, square3 (5), square4 (5), equality (4), u, v, x, y]`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeProof {
    /// Commitment `c'` to `b - m + 1` in base `c1`.
    #[serde(with = "decimal")]
    pub c_prime: BigInt,
    /// Commitment `c'1` to `m1`.
    #[serde(with = "decimal")]
    pub c_prime1: BigInt,
    /// Commitment `c'2` to `m2`.
    #[serde(with = "decimal")]
    pub c_prime2: BigInt,
    /// Commitment `c'3` to `m3`, a square.
    #[serde(with = "decimal")]
    pub c_prime3: BigInt,
    /// `c''` hides a square in base `c'`.
    pub square3: SquareProof,
    /// `c'3` hides a square.
    pub square4: SquareProof,
    /// `c'` and `c2` hide the same exponent.
    pub equality: EqualityProof,
    /// Randomness of `c'1^s * c'2 * c'3`.
    #[serde(with = "decimal")]
    pub u: BigInt,
    /// Randomness of `c'1 * c'2^t * c'3`.
    #[serde(with = "decimal")]
    pub v: BigInt,
    /// Value hidden in `c'1^s * c'2 * c'3`.
    #[serde(with = "decimal")]
    pub x: BigInt,
    /// Value hidden in `c'1 * c'2^t * c'3`.
    #[serde(with = "decimal")]
    pub y: BigInt,
}

impl RangeProof {
    /// Decodes the flat 22-integer proof.
    ///
    /// Trailing integers beyond the 22nd are ignored.
    ///
    /// # Errors
    ///
    /// Fails if fewer than 22 integers are given.
    pub fn from_slice(values: &[BigInt]) -> Result<Self> {
        require_len("range proof", values, RANGE_PROOF_LEN)?;
        Ok(Self {
            c_prime: values[0].clone(),
            c_prime1: values[1].clone(),
            c_prime2: values[2].clone(),
            c_prime3: values[3].clone(),
            square3: SquareProof::from_slice(&values[SQUARE3])?,
            square4: SquareProof::from_slice(&values[SQUARE4])?,
            equality: EqualityProof::from_slice(&values[EQUALITY])?,
            u: values[U].clone(),
            v: values[V].clone(),
            x: values[X].clone(),
            y: values[Y].clone(),
        })
    }

    /// Encodes the proof in the flat 22-integer layout.
    pub fn to_vec(&self) -> Vec<BigInt> {
        let mut out = Vec::with_capacity(RANGE_PROOF_LEN);
        out.extend([
            self.c_prime.clone(),
            self.c_prime1.clone(),
            self.c_prime2.clone(),
            self.c_prime3.clone(),
        ]);
        self.square3.extend_into(&mut out);
        self.square4.extend_into(&mut out);
        self.equality.extend_into(&mut out);
        out.extend([self.u.clone(), self.v.clone(), self.x.clone(), self.y.clone()]);
        out
    }
}
