mod common;

use common::{commit_and_prove, example_group};
use num_bigint::BigInt;
use proptest::prelude::*;
use range_proof_zkp::{validate, ClosedRange};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn proof_verifies_for_any_value_in_range(
        lower in -1_000_000i64..1_000_000,
        offset in 0i64..10_000,
        slack in 0i64..10_000,
    ) {
        let value = BigInt::from(lower + offset);
        let (lower, upper) = (BigInt::from(lower), BigInt::from(lower + offset + slack));
        let window = ClosedRange::new(lower.clone(), upper.clone());

        let (commitment, proof) = commit_and_prove(&example_group(), &value, &window);
        let result = validate(&lower, &upper, &commitment.to_vec(), &proof.to_vec());

        prop_assert!(result, "Value {} should verify in {}", value, window);
    }

    #[test]
    fn proof_fails_for_window_excluding_value(
        value in -1_000_000i64..1_000_000,
        gap in 1i64..1_000,
        width in 0i64..1_000,
        above in any::<bool>(),
    ) {
        let proven = ClosedRange::new(BigInt::from(value - 5_000), BigInt::from(value + 5_000));
        let (commitment, proof) = commit_and_prove(&example_group(), &BigInt::from(value), &proven);

        let (lower, upper) = if above {
            (value + gap, value + gap + width)
        } else {
            (value - gap - width, value - gap)
        };
        let result = validate(
            &BigInt::from(lower),
            &BigInt::from(upper),
            &commitment.to_vec(),
            &proof.to_vec(),
        );

        prop_assert!(!result, "Value {} must not verify in [{}, {}]", value, lower, upper);
    }

    #[test]
    fn validate_never_panics_on_arbitrary_input(
        lower in any::<i64>(),
        upper in any::<i64>(),
        commitment in prop::collection::vec(any::<i64>(), 0..6),
        proof in prop::collection::vec(any::<i64>(), 0..24),
    ) {
        let commitment: Vec<BigInt> = commitment.into_iter().map(BigInt::from).collect();
        let proof: Vec<BigInt> = proof.into_iter().map(BigInt::from).collect();

        let _ = validate(&BigInt::from(lower), &BigInt::from(upper), &commitment, &proof);
    }
}
