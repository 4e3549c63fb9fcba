/// Equality-constraint proof verification.
pub mod equality;
/// Core protocol types (group, commitment, range, proofs).
pub mod gadgets;
/// Square proof verification.
pub mod square;

pub use equality::EqualityStatement;
pub use gadgets::{
    ClosedRange, Commitment, EqualityProof, RangeProof, SecretOrderGroup, SquareProof,
    COMMITMENT_LEN, EQUALITY_PROOF_LEN, RANGE_PROOF_LEN, SQUARE_PROOF_LEN,
};
pub use square::verify_square;
