//! Circular-buffer knot hash.
//!
//! A ring of byte slots is permuted by reversing sub-ranges driven by a list
//! of lengths. One round gives the checksum (`ring[0] * ring[1]`); 64 salted
//! rounds folded into 16-slot XOR blocks give the dense hash.
//!
//! Not a cryptographic hash.

use knot_types::error::KnotError;

pub mod hash;
pub mod lengths;
pub mod ring;
pub mod round;

pub use hash::{
    checksum, checksum_with, dense_hash, digest, digest_bytes, digest_with, knot_hash, verify,
};
pub use ring::Ring;
pub use round::{hash_round, KnotHasher};

/// Reverse `length` slots of `ring` starting at `start mod len`.
pub fn twist(ring: &mut Ring, start: u64, length: usize) -> Result<(), KnotError> {
    ring.twist(start, length)
}
