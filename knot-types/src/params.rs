use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::KnotError;

/// Tunable parameters of a knot hash computation.
///
/// The defaults are the canonical ones: a 256-slot ring, 64 rounds and the
/// standard five-value salt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnotParams {
    /// Number of slots in the ring.
    #[serde(default = "default_ring_size")]
    pub ring_size: usize,
    /// Number of rounds in digest mode.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Lengths appended to every digest input.
    #[serde(default = "default_salt")]
    pub salt: Vec<usize>,
}

fn default_ring_size() -> usize {
    DEFAULT_RING_SIZE
}

fn default_rounds() -> usize {
    DEFAULT_ROUNDS
}

fn default_salt() -> Vec<usize> {
    STANDARD_SALT.to_vec()
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            ring_size: default_ring_size(),
            rounds: default_rounds(),
            salt: default_salt(),
        }
    }
}

impl KnotParams {
    /// Parameters for a ring of `ring_size` slots, other values canonical.
    pub fn with_ring_size(ring_size: usize) -> Self {
        Self {
            ring_size,
            ..Self::default()
        }
    }

    /// Check ring size, round count and salt against their bounds.
    pub fn validate(&self) -> Result<(), KnotError> {
        validate_ring_size(self.ring_size)?;
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(KnotError::InvalidRounds {
                rounds: self.rounds,
            });
        }
        if let Some(&length) = self.salt.iter().find(|&&l| l > self.ring_size) {
            return Err(KnotError::InvalidLength {
                length,
                ring_size: self.ring_size,
            });
        }
        Ok(())
    }

    /// Whether the ring folds evenly into dense-hash blocks.
    pub fn supports_digest(&self) -> bool {
        self.ring_size % DENSE_BLOCK_SIZE == 0
    }

    /// Dense hash length in bytes for these parameters.
    pub fn digest_len(&self) -> usize {
        self.ring_size / DENSE_BLOCK_SIZE
    }
}

/// Check that a ring of `ring_size` slots can be built.
pub fn validate_ring_size(ring_size: usize) -> Result<(), KnotError> {
    if ring_size < MIN_RING_SIZE {
        return Err(KnotError::InvalidRingSize {
            ring_size,
            reason: format!("must be at least {}", MIN_RING_SIZE),
        });
    }
    if ring_size > MAX_RING_SIZE {
        return Err(KnotError::InvalidRingSize {
            ring_size,
            reason: format!("must be at most {}", MAX_RING_SIZE),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_canonical() {
        let params = KnotParams::default();
        assert_eq!(params.ring_size, 256);
        assert_eq!(params.rounds, 64);
        assert_eq!(params.salt, vec![17, 31, 73, 47, 23]);
        assert!(params.validate().is_ok());
        assert!(params.supports_digest());
        assert_eq!(params.digest_len(), 16);
    }

    #[test]
    fn test_ring_size_bounds() {
        assert!(KnotParams::with_ring_size(1).validate().is_err());
        assert!(KnotParams::with_ring_size(2).validate().is_err()); // salt 73 > 2
        assert!(validate_ring_size(2).is_ok());
        assert!(validate_ring_size(256).is_ok());
        assert!(matches!(
            validate_ring_size(257),
            Err(KnotError::InvalidRingSize { ring_size: 257, .. })
        ));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let params = KnotParams {
            rounds: 0,
            ..KnotParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(KnotError::InvalidRounds { rounds: 0 })
        );
    }

    #[test]
    fn test_salt_longer_than_ring_rejected() {
        let params = KnotParams::with_ring_size(64);
        assert_eq!(
            params.validate(),
            Err(KnotError::InvalidLength {
                length: 73,
                ring_size: 64
            })
        );
    }

    #[test]
    fn test_digest_support() {
        assert!(!KnotParams::with_ring_size(100).supports_digest());
        assert!(KnotParams::with_ring_size(128).supports_digest());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: KnotParams = serde_json::from_str(r#"{"rounds": 8}"#).unwrap();
        assert_eq!(params.rounds, 8);
        assert_eq!(params.ring_size, DEFAULT_RING_SIZE);
        assert_eq!(params.salt, STANDARD_SALT.to_vec());
    }
}
