//! Safeword CLI
//!
//! Derive and check verification phrases for recipient pairs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use safeword_cli::{commands, CliConfig, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "safeword")]
#[command(about = "Safeword - verification phrases for recipient pairs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the phrase for two recipients
    Phrase {
        /// First recipient identifier
        recipient1: String,
        /// Second recipient identifier
        recipient2: String,
    },

    /// Check a phrase read back by a peer; exits with status 1 on mismatch
    Verify {
        /// First recipient identifier
        recipient1: String,
        /// Second recipient identifier
        recipient2: String,
        /// The phrase, as one quoted argument or as separate words
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },

    /// Print the SHA-256 digest of the sorted, concatenated recipients
    Digest {
        /// First recipient identifier
        recipient1: String,
        /// Second recipient identifier
        recipient2: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins, then --verbose, then the config file
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.unwrap_or(config.format);
    let mut stdout = std::io::stdout().lock();

    let code = match cli.command {
        Commands::Phrase {
            recipient1,
            recipient2,
        } => {
            commands::phrase(&recipient1, &recipient2, format, &mut stdout)?;
            ExitCode::SUCCESS
        }

        Commands::Verify {
            recipient1,
            recipient2,
            phrase,
        } => {
            if commands::verify_phrase(&recipient1, &recipient2, &phrase, format, &mut stdout)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Digest {
            recipient1,
            recipient2,
        } => {
            commands::digest(&recipient1, &recipient2, format, &mut stdout)?;
            ExitCode::SUCCESS
        }
    };

    stdout.flush()?;
    Ok(code)
}
