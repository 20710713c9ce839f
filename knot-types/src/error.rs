use thiserror::Error;

/// All error codes for the knot hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnotError {
    // ─── Length Errors ───────────────────────────────────────────────────────
    #[error("invalid length {length}: exceeds ring size {ring_size}")]
    InvalidLength { length: usize, ring_size: usize },

    #[error("cannot parse length field {field:?}: {reason}")]
    ParseLength { field: String, reason: String },

    // ─── Parameter Errors ────────────────────────────────────────────────────
    #[error("invalid ring size {ring_size}: {reason}")]
    InvalidRingSize { ring_size: usize, reason: String },

    #[error("invalid round count {rounds}")]
    InvalidRounds { rounds: usize },

    #[error("too many twists: {lengths} lengths over {rounds} rounds exceeds {max}")]
    TooManyTwists {
        lengths: usize,
        rounds: usize,
        max: u64,
    },

    // ─── Digest Errors ───────────────────────────────────────────────────────
    #[error("invalid digest: {reason}")]
    InvalidDigest { reason: String },
}
