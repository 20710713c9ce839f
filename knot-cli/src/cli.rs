use clap::{Parser, Subcommand};

use knot_hash::lengths::parse_lengths;
use knot_types::digest::DenseHash;

use crate::config::KnotConfig;
use crate::error::CliError;
use crate::input;
use crate::output::{Answer, OutputFormat};

#[derive(Parser)]
#[command(
    name = "knot",
    about = "Knot hash: single-round checksum and 64-round dense digest",
    version
)]
pub struct Cli {
    /// Path to config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Output format: "text" or "json" (overrides config)
    #[arg(long, global = true)]
    pub format: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Multiply the first two slots after one round over comma-separated lengths
    Checksum {
        /// Comma-separated lengths, e.g. "3,4,1,5"
        lengths: Option<String>,
        /// Read lengths from the first line of this file
        #[arg(short, long)]
        input: Option<String>,
        /// Override ring size
        #[arg(long)]
        ring_size: Option<usize>,
    },
    /// Compute the dense hash of a string
    Digest {
        /// Text to hash (read from --input or stdin when omitted)
        text: Option<String>,
        /// Read text from the first line of this file
        #[arg(short, long)]
        input: Option<String>,
        /// Override ring size
        #[arg(long)]
        ring_size: Option<usize>,
        /// Override number of rounds
        #[arg(long)]
        rounds: Option<usize>,
    },
    /// Answer both puzzle parts from one input file
    Solve {
        /// Puzzle input file
        #[arg(short, long, default_value = "input")]
        input: String,
    },
    /// Check a string against an expected hex digest
    Verify {
        /// Text to hash
        text: String,
        /// Expected digest in hex
        expected: String,
    },
    /// Initialize a new configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
}

/// Execute a command and return what should be printed on stdout.
pub fn run(cli: Cli, mut config: KnotConfig) -> Result<String, CliError> {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    let format = OutputFormat::parse(&config.output.format)?;

    match cli.command {
        Command::Checksum {
            lengths,
            input,
            ring_size,
        } => {
            let ring_size = ring_size.unwrap_or(config.hash.ring_size);
            let line = input::resolve(lengths, input.as_deref())?;
            let lengths = parse_lengths(&line)?;
            let checksum = knot_hash::checksum_with(&lengths, ring_size)?;
            Answer::Checksum {
                ring_size,
                checksum,
            }
            .render(format)
        }
        Command::Digest {
            text,
            input,
            ring_size,
            rounds,
        } => {
            let mut params = config.hash;
            if let Some(ring_size) = ring_size {
                params.ring_size = ring_size;
            }
            if let Some(rounds) = rounds {
                params.rounds = rounds;
            }
            let line = input::resolve(text, input.as_deref())?;
            let digest = knot_hash::digest_with(&line, &params)?;
            Answer::Digest { digest }.render(format)
        }
        Command::Solve { input } => {
            let params = config.hash;
            let line = input::read_first_line(&input)?;
            let lengths = parse_lengths(&line)?;
            let checksum = knot_hash::checksum_with(&lengths, params.ring_size)?;
            let digest = knot_hash::digest_with(&line, &params)?;
            Answer::Solve { checksum, digest }.render(format)
        }
        Command::Verify { text, expected } => {
            let expected: DenseHash = expected.parse()?;
            if !knot_hash::verify(&text, &expected, &config.hash)? {
                tracing::warn!(%expected, "digest mismatch");
                return Err(CliError::DigestMismatch {
                    expected: expected.to_hex(),
                });
            }
            Answer::Verify { digest: expected }.render(format)
        }
        Command::Init { dir } => {
            let path = KnotConfig::init(&dir)?;
            tracing::info!("Knot configuration initialized in {}", dir);
            Ok(format!("wrote {}", path))
        }
    }
}
