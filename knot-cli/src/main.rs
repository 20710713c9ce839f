use clap::Parser;
use tracing_subscriber::EnvFilter;

use knot_cli::cli;
use knot_cli::config::KnotConfig;

fn main() {
    let cli = cli::Cli::parse();

    let config = match KnotConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG takes precedence over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    match cli::run(cli, config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            std::process::exit(1);
        }
    }
}
