//! Attachment tuner entry point.
//!
//! Run with: `attachment-tuner apply --data-dir <dir>`

mod commands;
mod config;
mod reporter;

use anyhow::Result;
use clap::Parser;
use commands::{Apply, ShowConfig};
use config::TunerConfig;

/// Adjust weapon attachment stats from a configuration file
#[derive(Parser)]
#[command(name = "attachment-tuner")]
#[command(about = "Adjust weapon attachment stats", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Adjust every attachment in the catalog
    Apply(Apply),

    /// Print the normalized configuration
    ShowConfig(ShowConfig),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TUNER_DATA_DIR)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = TunerConfig::from_env();

    match cli.command {
        Command::Apply(cmd) => cmd.execute(&env),
        Command::ShowConfig(cmd) => cmd.execute(&env),
    }
}
