#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use range_proof_zkp::validate;

/// Splits the input into signed big-endian integers of 1 to 16 bytes, each
/// prefixed by a length byte.
fn integers(mut data: &[u8]) -> Vec<BigInt> {
    let mut out = Vec::new();
    while let Some((&len, rest)) = data.split_first() {
        let len = usize::from(len % 16) + 1;
        let take = len.min(rest.len());
        out.push(BigInt::from_signed_bytes_be(&rest[..take]));
        data = &rest[take..];
    }
    out
}

fuzz_target!(|data: &[u8]| {
    let values = integers(data);
    if values.len() < 2 {
        return;
    }

    let (limits, rest) = values.split_at(2);
    let split = rest.len().min(4);
    let (commitment, proof) = rest.split_at(split);

    let _ = validate(&limits[0], &limits[1], commitment, proof);
});
