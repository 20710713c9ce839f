// ─── Ring Parameters ─────────────────────────────────────────────────────────

/// Number of slots in the canonical ring.
pub const DEFAULT_RING_SIZE: usize = 256;

/// Largest supported ring. Slot values are stored as bytes.
pub const MAX_RING_SIZE: usize = 256;

/// Smallest supported ring. The checksum multiplies the first two slots.
pub const MIN_RING_SIZE: usize = 2;

// ─── Round Parameters ────────────────────────────────────────────────────────

/// Number of rounds used to build the sparse hash in digest mode.
pub const DEFAULT_ROUNDS: usize = 64;

/// Upper bound on configurable rounds.
pub const MAX_ROUNDS: usize = 65_536;

/// Upper bound on twists (`rounds * lengths`) in one computation.
///
/// After `t` twists the unclamped cursor is at most
/// `t*MAX_RING_SIZE + t^2/2`, which for `t <= 2^31` stays below `2^62`.
pub const MAX_TWISTS: u64 = 1 << 31;

/// Rounds used in checksum mode.
pub const CHECKSUM_ROUNDS: usize = 1;

// ─── Digest Parameters ───────────────────────────────────────────────────────

/// Standard length suffix appended to every digest input.
pub const STANDARD_SALT: [usize; 5] = [17, 31, 73, 47, 23];

/// Number of sparse-hash slots folded into one dense-hash byte.
pub const DENSE_BLOCK_SIZE: usize = 16;
