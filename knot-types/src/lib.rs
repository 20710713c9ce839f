pub mod constants;
pub mod digest;
pub mod error;
pub mod params;

#[cfg(test)]
mod tests {
    use borsh::{BorshDeserialize, BorshSerialize};

    /// Helper: borsh round-trip test.
    fn borsh_roundtrip<T: BorshSerialize + BorshDeserialize + PartialEq + std::fmt::Debug>(
        value: &T,
    ) {
        let encoded = borsh::to_vec(value).expect("borsh serialize failed");
        let decoded = T::try_from_slice(&encoded).expect("borsh deserialize failed");
        assert_eq!(*value, decoded);
    }

    #[test]
    fn test_dense_hash_roundtrip() {
        use crate::digest::DenseHash;
        borsh_roundtrip(&DenseHash::from_bytes(vec![0xa2, 0x58, 0x2a, 0x3a]));
    }

    #[test]
    fn test_dense_hash_borsh_is_length_prefixed() {
        use crate::digest::DenseHash;
        let encoded = borsh::to_vec(&DenseHash::from_bytes(vec![7u8; 16])).unwrap();
        assert_eq!(encoded.len(), 4 + 16);
        assert_eq!(&encoded[..4], &16u32.to_le_bytes());
    }
}
