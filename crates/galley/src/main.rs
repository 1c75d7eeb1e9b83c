//! Galley CLI - build-output verification for documentation sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "galley")]
#[command(about = "Verifies a documentation site's build output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to galley.toml config file
    #[arg(short, long, default_value = "galley.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site and verify its output
    Run {
        /// Verify an existing output tree without invoking the generator
        #[arg(long)]
        skip_build: bool,

        /// Leave the output directory in place after the run
        #[arg(long)]
        keep_output: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the expected CSS bundle digest and path
    Hash,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Run {
            skip_build,
            keep_output,
            json,
        } => {
            commands::run::run(&cli.config, skip_build, keep_output, json).await?;
        }
        Commands::Hash => {
            commands::hash::run(&cli.config)?;
        }
    }

    Ok(())
}
