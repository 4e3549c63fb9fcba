//! Common test utilities shared across integration tests and benchmarks.
//!
//! Includes an honest prover: the library only verifies, so proofs for tests
//! are produced here from the public arithmetic primitives.

#![allow(dead_code)]

use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Zero};
use range_proof_zkp::primitives::{
    challenge_hash, div_mod, mod_pow, mod_product, range_challenge,
};
use range_proof_zkp::{
    ClosedRange, Commitment, EqualityProof, RangeProof, SecretOrderGroup, SquareProof,
};

/// Bit length of the prover's statistical blinding for range-proof secrets.
const BLINDING_BITS: usize = 2048;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Shows debug events from the library, including which check rejected a
/// proof. Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("range_proof_zkp=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Toy 107-bit group. Fast, and far too small for real use.
pub fn example_group() -> SecretOrderGroup {
    SecretOrderGroup::new(
        "123763483659823661164839153854113".parse().unwrap(),
        "9978076495933337078596144096749".parse().unwrap(),
        "46959937887401751832025265468109".parse().unwrap(),
    )
    .unwrap()
}

fn random_below_bits(bits: usize) -> BigInt {
    rand::thread_rng().gen_bigint_range(&BigInt::zero(), &(BigInt::one() << bits))
}

fn random_symmetric(bound: &BigInt) -> BigInt {
    rand::thread_rng().gen_bigint_range(&-bound, bound)
}

/// Computes `g^x * h^r mod n` for arbitrary bases.
pub fn pedersen(n: &BigInt, g: &BigInt, h: &BigInt, x: &BigInt, r: &BigInt) -> BigInt {
    mod_product(&[&mod_pow(g, x, n).unwrap(), &mod_pow(h, r, n).unwrap()], n).unwrap()
}

/// Commits to `value` with a fresh random key; returns the commitment and key.
pub fn commit(group: &SecretOrderGroup, value: &BigInt) -> (Commitment, BigInt) {
    let key = random_symmetric(&(group.modulus() << 8));
    let c = group.commit(value, &key).unwrap();
    (Commitment::new(group.clone(), c), key)
}

/// Proves that `g1^x * h1^r1` and `g2^x * h2^r2` share the exponent `x`.
#[allow(clippy::too_many_arguments)]
pub fn prove_equality(
    n: &BigInt,
    g1: &BigInt,
    h1: &BigInt,
    g2: &BigInt,
    h2: &BigInt,
    x: &BigInt,
    r1: &BigInt,
    r2: &BigInt,
) -> EqualityProof {
    let bits = (x.bits() + r1.bits().max(r2.bits()) + n.bits()) as usize + 512;
    let w = random_below_bits(bits) + 1u8;
    let n1 = random_below_bits(bits) + 1u8;
    let n2 = random_below_bits(bits) + 1u8;

    let w1 = pedersen(n, g1, h1, &w, &n1);
    let w2 = pedersen(n, g2, h2, &w, &n2);
    let challenge = challenge_hash(&w1, Some(&w2));

    EqualityProof {
        d: &w + &challenge * x,
        d1: &n1 + &challenge * r1,
        d2: &n2 + &challenge * r2,
        challenge,
    }
}

/// Proves that `g^(x^2) * h^r mod n` hides a square.
pub fn prove_square(n: &BigInt, g: &BigInt, h: &BigInt, x: &BigInt, r: &BigInt) -> SquareProof {
    let r1 = random_symmetric(&(n << 64));
    let root = pedersen(n, g, h, x, &r1);
    let r2 = r - x * &r1;

    SquareProof {
        equality: prove_equality(n, g, h, &root, h, x, &r1, &r2),
        commitment: root,
    }
}

/// Proves that `commitment`, opened by `(value, key)`, hides a value in `range`.
///
/// # Panics
///
/// Panics if `value` is outside `range`; an honest prover cannot proceed.
pub fn prove_range(
    commitment: &Commitment,
    value: &BigInt,
    key: &BigInt,
    range: &ClosedRange,
) -> RangeProof {
    assert!(range.contains(value), "value {value} outside {range}");

    let group = commitment.group();
    let (n, g, h) = (group.modulus(), group.g(), group.h());
    let (a, b) = (range.start(), range.end());
    let c = commitment.value();
    let mut rng = rand::thread_rng();

    let c1 = div_mod(c, &mod_pow(g, &(a - 1u8), n).unwrap(), n).unwrap();
    let c2 = div_mod(&mod_pow(g, &(b + 1u8), n).unwrap(), c, n).unwrap();

    let below: BigInt = value - a + 1u8;
    let above: BigInt = b - value + 1u8;

    let r_prime = random_below_bits(BLINDING_BITS);
    let c_prime = pedersen(n, &c1, h, &above, &r_prime);
    let equality = prove_equality(n, g, h, &c1, h, &above, &-key, &r_prime);

    let w = random_below_bits(BLINDING_BITS) + 1u8;
    let w_squared = &w * &w;
    let r_double_prime = random_below_bits(BLINDING_BITS);
    let c_double_prime = pedersen(n, &c_prime, h, &w_squared, &r_double_prime);
    let square3 = prove_square(n, &c_prime, h, &w, &r_double_prime);

    // w^2 (m - a + 1)(b - m + 1) = m1 + m2 + m4^2
    let total: BigInt = &w_squared * &below * &above;
    let m4 = rng.gen_bigint_range(&BigInt::zero(), &(total.sqrt() + 1u8));
    let m3 = &m4 * &m4;
    let rest = &total - &m3;
    let m1 = rng.gen_bigint_range(&BigInt::zero(), &(&rest + 1u8));
    let m2 = &rest - &m1;

    let key_total = &w_squared * (&above * key + &r_prime) + &r_double_prime;
    let r1 = random_symmetric(n);
    let r2 = random_symmetric(n);
    let r3 = &key_total - &r1 - &r2;

    let c_prime1 = group.commit(&m1, &r1).unwrap();
    let c_prime2 = group.commit(&m2, &r2).unwrap();
    let c_prime12 = mod_product(&[&c_prime1, &c_prime2], n).unwrap();
    let c_prime3 = div_mod(&c_double_prime, &c_prime12, n).unwrap();
    let square4 = prove_square(n, g, h, &m4, &r3);

    let s = range_challenge(&c1);
    let t = range_challenge(&c2);

    RangeProof {
        c_prime,
        c_prime1,
        c_prime2,
        c_prime3,
        square3,
        square4,
        equality,
        x: &s * &m1 + &m2 + &m3,
        y: &m1 + &t * &m2 + &m3,
        u: &s * &r1 + &r2 + &r3,
        v: &r1 + &t * &r2 + &r3,
    }
}

/// Commits to `value` and proves it lies in `range`.
pub fn commit_and_prove(
    group: &SecretOrderGroup,
    value: &BigInt,
    range: &ClosedRange,
) -> (Commitment, RangeProof) {
    let (commitment, key) = commit(group, value);
    let proof = prove_range(&commitment, value, &key, range);
    (commitment, proof)
}
