//! Abbreviated rendering of large integers for log output.

use core::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

/// Number of leading and trailing digits shown by default.
const DEFAULT_DIGITS: usize = 4;

/// Displays an integer as its first and last digits around an ellipsis.
///
/// Integers with at most `2 * digits` decimal digits are shown in full.
///
/// ```rust
/// use num_bigint::BigInt;
/// use range_proof_zkp::primitives::ShortInt;
///
/// let n: BigInt = "123456789".parse().unwrap();
/// assert_eq!(ShortInt::with_digits(&n, 2).to_string(), "12…89");
/// assert_eq!(ShortInt::new(&BigInt::from(-1)).to_string(), "-1");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShortInt<'a> {
    value: &'a BigInt,
    digits: usize,
}

impl<'a> ShortInt<'a> {
    /// Shows four leading and four trailing digits.
    pub fn new(value: &'a BigInt) -> Self {
        Self::with_digits(value, DEFAULT_DIGITS)
    }

    /// Shows `digits` leading and `digits` trailing digits.
    pub fn with_digits(value: &'a BigInt, digits: usize) -> Self {
        Self { value, digits }
    }
}

impl fmt::Display for ShortInt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.value.abs().to_string();
        let sign = if self.value.is_negative() { "-" } else { "" };

        if magnitude.len() <= 2 * self.digits {
            return write!(f, "{sign}{magnitude}");
        }

        let head = &magnitude[..self.digits];
        let tail = &magnitude[magnitude.len() - self.digits..];
        write!(f, "{sign}{head}…{tail}")
    }
}
