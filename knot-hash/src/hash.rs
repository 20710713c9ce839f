use knot_types::constants::{CHECKSUM_ROUNDS, DEFAULT_RING_SIZE, DENSE_BLOCK_SIZE};
use knot_types::digest::DenseHash;
use knot_types::error::KnotError;
use knot_types::params::{validate_ring_size, KnotParams};

use crate::lengths::{ascii_lengths, byte_lengths};
use crate::ring::Ring;
use crate::round::KnotHasher;

/// Single-round checksum over the canonical 256-slot ring.
///
/// Returns the product of the first two slots after one round.
pub fn checksum(lengths: &[usize]) -> Result<u32, KnotError> {
    checksum_with(lengths, DEFAULT_RING_SIZE)
}

/// Single-round checksum over a ring of `ring_size` slots.
pub fn checksum_with(lengths: &[usize], ring_size: usize) -> Result<u32, KnotError> {
    validate_ring_size(ring_size)?;
    tracing::debug!(ring_size, lengths = lengths.len(), "computing knot checksum");

    let mut engine = KnotHasher::new(ring_size)?;
    engine.run(lengths, CHECKSUM_ROUNDS)?;
    Ok(engine.ring().checksum())
}

/// Canonical knot hash of `input` as 32 lowercase hex characters.
pub fn digest(input: &str) -> Result<String, KnotError> {
    Ok(knot_hash(input)?.to_hex())
}

/// Canonical knot hash of `input`.
///
/// Trailing whitespace is stripped and the standard salt appended before
/// running 64 rounds over a 256-slot ring. Only inputs long enough to pass
/// the twist budget fail.
pub fn knot_hash(input: &str) -> Result<DenseHash, KnotError> {
    digest_with(input, &KnotParams::default())
}

/// Knot hash of `input` under custom parameters.
pub fn digest_with(input: &str, params: &KnotParams) -> Result<DenseHash, KnotError> {
    digest_lengths(&ascii_lengths(input, &params.salt), params)
}

/// Knot hash of arbitrary bytes. No whitespace stripping is applied.
pub fn digest_bytes(bytes: &[u8], params: &KnotParams) -> Result<DenseHash, KnotError> {
    digest_lengths(&byte_lengths(bytes, &params.salt), params)
}

fn digest_lengths(lengths: &[usize], params: &KnotParams) -> Result<DenseHash, KnotError> {
    params.validate()?;
    if !params.supports_digest() {
        return Err(KnotError::InvalidRingSize {
            ring_size: params.ring_size,
            reason: format!("must be a multiple of {} for a digest", DENSE_BLOCK_SIZE),
        });
    }
    tracing::debug!(
        ring_size = params.ring_size,
        rounds = params.rounds,
        lengths = lengths.len(),
        "computing knot hash"
    );

    let mut engine = KnotHasher::new(params.ring_size)?;
    engine.run(lengths, params.rounds)?;
    engine.dense_hash()
}

/// Recompute the digest of `input` and compare it against `expected`.
///
/// An `expected` of the wrong width for `params` is rejected rather than
/// reported as a mismatch.
pub fn verify(input: &str, expected: &DenseHash, params: &KnotParams) -> Result<bool, KnotError> {
    if expected.len() != params.digest_len() {
        return Err(KnotError::InvalidDigest {
            reason: format!(
                "expected {} bytes, got {}",
                params.digest_len(),
                expected.len()
            ),
        });
    }
    Ok(digest_with(input, params)? == *expected)
}

/// XOR-fold a ring into one byte per 16-slot block, in block order.
pub fn dense_hash(ring: &Ring) -> Result<DenseHash, KnotError> {
    if ring.len() % DENSE_BLOCK_SIZE != 0 {
        return Err(KnotError::InvalidRingSize {
            ring_size: ring.len(),
            reason: format!("must be a multiple of {} for a digest", DENSE_BLOCK_SIZE),
        });
    }
    Ok(fold_dense(ring.as_slice()))
}

fn fold_dense(sparse: &[u8]) -> DenseHash {
    DenseHash::from_bytes(
        sparse
            .chunks(DENSE_BLOCK_SIZE)
            .map(|block| block.iter().fold(0u8, |acc, &v| acc ^ v))
            .collect(),
    )
}
