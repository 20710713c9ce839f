use knot_types::error::KnotError;
use knot_types::params::validate_ring_size;

/// Fixed-size circular buffer holding the permutation state.
///
/// Slot values are bytes, so a ring holds at most 256 slots. Every mutation
/// is a sub-range reversal, so the ring is always a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    slots: Vec<u8>,
}

impl Ring {
    /// Create a ring initialized to `0..size`.
    pub fn new(size: usize) -> Result<Self, KnotError> {
        validate_ring_size(size)?;
        Ok(Self {
            slots: (0..size).map(|v| v as u8).collect(),
        })
    }

    /// Restore the initial `0..len` ordering.
    pub fn reset(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = i as u8;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }

    /// Reverse `length` consecutive slots starting at `start mod len`,
    /// wrapping around the end of the ring.
    pub fn twist(&mut self, start: u64, length: usize) -> Result<(), KnotError> {
        if length > self.len() {
            return Err(KnotError::InvalidLength {
                length,
                ring_size: self.len(),
            });
        }
        self.reverse_span(start, length);
        Ok(())
    }

    /// Unchecked twist. Caller guarantees `length <= len`.
    pub(crate) fn reverse_span(&mut self, start: u64, length: usize) {
        let n = self.slots.len();
        let base = (start % n as u64) as usize;
        for i in 0..length / 2 {
            let a = (base + i) % n;
            let b = (base + length - 1 - i) % n;
            self.slots.swap(a, b);
        }
    }

    /// Product of the first two slots.
    pub fn checksum(&self) -> u32 {
        u32::from(self.slots[0]) * u32::from(self.slots[1])
    }

    /// Whether every value in `0..len` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        for &v in &self.slots {
            let v = v as usize;
            if v >= seen.len() || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}
