//! Derivation and validation of length lists.
//!
//! Checksum mode reads lengths as comma-separated integers. Digest mode uses
//! the byte value of every input character followed by a fixed salt.

use knot_types::error::KnotError;

/// Parse a comma-separated list of lengths.
///
/// Whitespace around fields is ignored. Blank input is an empty list.
pub fn parse_lengths(text: &str) -> Result<Vec<usize>, KnotError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|field| {
            let field = field.trim();
            field.parse::<usize>().map_err(|e| KnotError::ParseLength {
                field: field.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Byte values of `text` with trailing whitespace stripped, followed by `salt`.
///
/// Non-ASCII characters contribute one length per UTF-8 byte.
pub fn ascii_lengths(text: &str, salt: &[usize]) -> Vec<usize> {
    byte_lengths(text.trim_end().as_bytes(), salt)
}

/// Byte values of `bytes` followed by `salt`.
pub fn byte_lengths(bytes: &[u8], salt: &[usize]) -> Vec<usize> {
    let mut lengths = Vec::with_capacity(bytes.len() + salt.len());
    lengths.extend(bytes.iter().map(|&b| usize::from(b)));
    lengths.extend_from_slice(salt);
    lengths
}

/// Reject the first length that does not fit a ring of `ring_size` slots.
pub fn validate_lengths(lengths: &[usize], ring_size: usize) -> Result<(), KnotError> {
    match lengths.iter().find(|&&l| l > ring_size) {
        Some(&length) => Err(KnotError::InvalidLength { length, ring_size }),
        None => Ok(()),
    }
}
