use knot_types::constants::MAX_TWISTS;
use knot_types::digest::DenseHash;
use knot_types::error::KnotError;

use crate::hash::dense_hash;
use crate::lengths::validate_lengths;
use crate::ring::Ring;

/// Apply one twist per length, advancing the cursor by `length + skip` and
/// the skip size by one after each.
///
/// All lengths are checked before the ring is touched. Returns the updated
/// `(cursor, skip)` for chaining into the next round. The cursor is carried
/// unclamped; only the slot indices derived from it wrap.
pub fn hash_round(
    ring: &mut Ring,
    cursor: u64,
    skip: u64,
    lengths: &[usize],
) -> Result<(u64, u64), KnotError> {
    validate_lengths(lengths, ring.len())?;
    Ok(apply_round(ring, cursor, skip, lengths))
}

fn apply_round(
    ring: &mut Ring,
    mut cursor: u64,
    mut skip: u64,
    lengths: &[usize],
) -> (u64, u64) {
    for &length in lengths {
        ring.reverse_span(cursor, length);
        cursor += length as u64 + skip;
        skip += 1;
    }
    (cursor, skip)
}

/// Knot hash engine: a ring plus the cursor and skip size that thread
/// through successive rounds.
///
/// A fresh (or [`reset`](KnotHasher::reset)) engine starts from the identity
/// ring with cursor and skip at zero.
#[derive(Debug, Clone)]
pub struct KnotHasher {
    ring: Ring,
    cursor: u64,
    skip: u64,
}

impl KnotHasher {
    /// Create an engine over a ring of `ring_size` slots.
    pub fn new(ring_size: usize) -> Result<Self, KnotError> {
        Ok(Self {
            ring: Ring::new(ring_size)?,
            cursor: 0,
            skip: 0,
        })
    }

    /// Run `rounds` rounds over `lengths`, keeping ring, cursor and skip
    /// between rounds.
    ///
    /// Fails before any mutation with [`KnotError::InvalidLength`] if a
    /// length exceeds the ring size, or [`KnotError::TooManyTwists`] if the
    /// total twist count (counting earlier runs) would pass [`MAX_TWISTS`].
    pub fn run(&mut self, lengths: &[usize], rounds: usize) -> Result<(), KnotError> {
        validate_lengths(lengths, self.ring.len())?;
        let twists = (lengths.len() as u64)
            .checked_mul(rounds as u64)
            .and_then(|t| t.checked_add(self.skip));
        if !matches!(twists, Some(t) if t <= MAX_TWISTS) {
            return Err(KnotError::TooManyTwists {
                lengths: lengths.len(),
                rounds,
                max: MAX_TWISTS,
            });
        }

        for round in 0..rounds {
            let (cursor, skip) = apply_round(&mut self.ring, self.cursor, self.skip, lengths);
            self.cursor = cursor;
            self.skip = skip;
            tracing::trace!(round, cursor, skip, "knot round complete");
        }
        Ok(())
    }

    /// Return to the identity ring with cursor and skip at zero.
    pub fn reset(&mut self) {
        self.ring.reset();
        self.cursor = 0;
        self.skip = 0;
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// The current ring state.
    pub fn sparse_hash(&self) -> &[u8] {
        self.ring.as_slice()
    }

    /// XOR-fold the current ring state into 16-slot blocks.
    pub fn dense_hash(&self) -> Result<DenseHash, KnotError> {
        dense_hash(&self.ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example_round() {
        let mut ring = Ring::new(5).unwrap();
        let (cursor, skip) = hash_round(&mut ring, 0, 0, &[3, 4, 1, 5]).unwrap();
        assert_eq!(ring.as_slice(), &[3, 4, 2, 1, 0]);
        assert_eq!(cursor, 19);
        assert_eq!(skip, 4);
        assert_eq!(ring.checksum(), 12);
    }

    #[test]
    fn test_empty_lengths_change_nothing() {
        let mut ring = Ring::new(5).unwrap();
        let (cursor, skip) = hash_round(&mut ring, 7, 3, &[]).unwrap();
        assert_eq!((cursor, skip), (7, 3));
        assert_eq!(ring, Ring::new(5).unwrap());
    }

    #[test]
    fn test_invalid_length_rejected_before_mutation() {
        let mut ring = Ring::new(5).unwrap();
        let err = hash_round(&mut ring, 0, 0, &[3, 4, 6]).unwrap_err();
        assert_eq!(
            err,
            KnotError::InvalidLength {
                length: 6,
                ring_size: 5
            }
        );
        assert_eq!(ring, Ring::new(5).unwrap());
    }

    #[test]
    fn test_cursor_is_not_clamped() {
        let mut ring = Ring::new(5).unwrap();
        let (cursor, _) = hash_round(&mut ring, 0, 0, &[5, 5, 5]).unwrap();
        // 5 + 0, then 5 + 1, then 5 + 2
        assert_eq!(cursor, 18);
    }

    #[test]
    fn test_rounds_thread_cursor_and_skip() {
        let lengths = [3, 4, 1, 5];
        let mut engine = KnotHasher::new(5).unwrap();
        engine.run(&lengths, 2).unwrap();

        let mut ring = Ring::new(5).unwrap();
        let (c, s) = hash_round(&mut ring, 0, 0, &lengths).unwrap();
        let (c, s) = hash_round(&mut ring, c, s, &lengths).unwrap();

        assert_eq!(engine.ring(), &ring);
        assert_eq!(engine.cursor(), c);
        assert_eq!(engine.skip(), s);
        assert_eq!(engine.skip(), 8);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut engine = KnotHasher::new(16).unwrap();
        engine.run(&[3, 9, 16], 4).unwrap();
        engine.reset();
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.skip(), 0);
        assert_eq!(engine.ring(), &Ring::new(16).unwrap());
    }

    #[test]
    fn test_engine_rejects_invalid_length() {
        let mut engine = KnotHasher::new(8).unwrap();
        assert!(engine.run(&[1, 9], 3).is_err());
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.ring(), &Ring::new(8).unwrap());
    }

    #[test]
    fn test_twist_budget_enforced_before_mutation() {
        let mut engine = KnotHasher::new(4).unwrap();
        let lengths = vec![1usize; 1 << 16];
        let err = engine.run(&lengths, (1 << 15) + 1).unwrap_err();
        assert!(matches!(
            err,
            KnotError::TooManyTwists { rounds, .. } if rounds == (1 << 15) + 1
        ));
        assert_eq!(engine.skip(), 0);
        assert_eq!(engine.ring(), &Ring::new(4).unwrap());
    }

    proptest! {
        #[test]
        fn rounds_preserve_permutation(
            size in 2usize..=256,
            lengths in prop::collection::vec(0usize..=256, 0..40),
            rounds in 1usize..8,
        ) {
            let lengths: Vec<usize> = lengths.into_iter().map(|l| l.min(size)).collect();
            let mut engine = KnotHasher::new(size).unwrap();
            engine.run(&lengths, rounds).unwrap();
            prop_assert!(engine.ring().is_permutation());
            prop_assert_eq!(engine.skip(), (rounds * lengths.len()) as u64);
        }
    }
}
