use serde::Serialize;

use knot_types::digest::DenseHash;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, CliError> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::ConfigError {
                reason: format!("unknown output format '{}', expected 'text' or 'json'", other),
            }),
        }
    }
}

/// Result of a single command, ready to be rendered.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Answer {
    Checksum {
        ring_size: usize,
        checksum: u32,
    },
    Digest {
        digest: DenseHash,
    },
    Solve {
        checksum: u32,
        digest: DenseHash,
    },
    Verify {
        digest: DenseHash,
    },
}

impl Answer {
    /// Render for stdout in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| CliError::OutputError {
                    reason: e.to_string(),
                })
            }
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Answer::Checksum { checksum, .. } => checksum.to_string(),
            Answer::Digest { digest } => digest.to_hex(),
            Answer::Solve { checksum, digest } => {
                let dim = console::Style::new().dim();
                format!(
                    "{} {}\n{} {}",
                    dim.apply_to("P1:"),
                    checksum,
                    dim.apply_to("P2:"),
                    digest
                )
            }
            Answer::Verify { digest } => {
                format!("{} {}", digest, console::Style::new().green().apply_to("ok"))
            }
        }
    }
}
