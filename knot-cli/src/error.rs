use knot_types::error::KnotError;
use thiserror::Error;

/// Errors that can occur in the command-line front end.
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum CliError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("input error: {reason}")]
    InputError { reason: String },

    #[error("output error: {reason}")]
    OutputError { reason: String },

    #[error("digest mismatch: input does not hash to {expected}")]
    DigestMismatch { expected: String },

    #[error("knot hash error: {0}")]
    KnotError(#[from] KnotError),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CliError::ConfigError {
            reason: "missing field".to_string(),
        };
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_knot_error_from() {
        let err: CliError = KnotError::InvalidLength {
            length: 300,
            ring_size: 256,
        }
        .into();
        assert!(matches!(err, CliError::KnotError(_)));
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::IoError(_)));
    }
}
