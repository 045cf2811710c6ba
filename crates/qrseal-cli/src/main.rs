//! qrseal CLI
//!
//! Command-line interface for sealing messages into tamper-evident
//! tokens and verifying them on the way back in.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "qrseal")]
#[command(about = "Seal messages into tamper-evident tokens and verify them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal a message into a token
    Encode {
        /// Message text to seal
        #[arg(short, long, conflicts_with = "infile")]
        text: Option<String>,

        /// Read the message bytes from a file
        #[arg(short, long)]
        infile: Option<PathBuf>,

        /// Secret key for keyed sealing (can also be set via QRSEAL_KEY env var)
        #[arg(short, long)]
        key: Option<String>,

        /// Embed the token into this URL
        #[arg(short, long)]
        url: Option<String>,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Render the output as a terminal QR code
        #[arg(long)]
        qr: bool,
    },

    /// Verify a token or a token-bearing URL
    Decode {
        /// Token or URL to verify
        input: Option<String>,

        /// Read the token or URL from a file
        #[arg(short, long, conflicts_with = "input")]
        infile: Option<PathBuf>,

        /// Secret key for keyed verification (can also be set via QRSEAL_KEY env var)
        #[arg(short, long)]
        key: Option<String>,

        /// Write the verified message bytes to a file
        #[arg(short, long)]
        restore: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("qrseal_cli=debug,qrseal=debug,qrseal_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("qrseal_cli=info,qrseal=warn")
            .init();
    }

    match cli.command {
        Commands::Encode {
            text,
            infile,
            key,
            url,
            out,
            qr,
        } => {
            commands::encode::run(
                text,
                infile.as_deref(),
                key,
                url.as_deref(),
                out.as_deref(),
                qr,
            )?;
        }
        Commands::Decode {
            input,
            infile,
            key,
            restore,
        } => {
            let valid = commands::decode::run(input, infile.as_deref(), key, restore.as_deref())?;
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
