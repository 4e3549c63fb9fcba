//! Modular arithmetic over arbitrary-precision signed integers.
//!
//! Addition, subtraction and multiplication are the `num-bigint` operator
//! implementations; this module covers the operations that need a modulus.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

use crate::{Error, Result};

fn check_modulus(modulus: &BigInt) -> Result<()> {
    if !modulus.is_positive() {
        return Err(Error::InvalidParams("modulus must be positive".to_string()));
    }
    Ok(())
}

/// Returns the residue of `value` in `[0, modulus - 1]`.
pub fn mod_floor(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;
    Ok(value.mod_floor(modulus))
}

/// Computes the multiplicative inverse of `value` modulo `modulus`.
///
/// The result lies in `[0, modulus - 1]`. Fails with [`Error::NotInvertible`]
/// when `value` shares a nontrivial factor with `modulus`.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;
    value.modinv(modulus).ok_or(Error::NotInvertible)
}

/// Computes `base^exponent mod modulus`, accepting negative exponents.
///
/// A negative exponent is evaluated as the inverse of `base^|exponent|`, so it
/// fails with [`Error::NotInvertible`] when `base` is not a unit modulo
/// `modulus`. The result lies in `[0, modulus - 1]`.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;

    if exponent.is_negative() {
        let positive = base.modpow(&exponent.abs(), modulus);
        return mod_inverse(&positive, modulus);
    }

    Ok(base.modpow(exponent, modulus))
}

/// Computes `numerator * denominator^-1 mod modulus`.
pub fn div_mod(numerator: &BigInt, denominator: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    let inverse = mod_inverse(denominator, modulus)?;
    Ok((numerator * inverse).mod_floor(modulus))
}

/// Multiplies all `factors` and reduces the product modulo `modulus`.
///
/// The running product is reduced after every step; an empty slice yields
/// `1 mod modulus`.
pub fn mod_product(factors: &[&BigInt], modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;

    let mut acc = BigInt::from(1u8).mod_floor(modulus);
    for factor in factors {
        acc = (acc * *factor).mod_floor(modulus);
    }
    Ok(acc)
}
