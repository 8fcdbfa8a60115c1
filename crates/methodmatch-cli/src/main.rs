//! methodmatch CLI tool.
//!
//! Usage:
//! ```bash
//! methodmatch check [OPTIONS] <SNAPSHOT>
//! methodmatch list-presets
//! methodmatch init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Runs declarative method matchers over resolved program snapshots
#[derive(Parser)]
#[command(name = "methodmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match call sites in a snapshot file
    Check {
        /// Snapshot file (TOML) to check
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Presets, entry names or codes to enable (comma-separated)
        #[arg(long)]
        presets: Option<String>,

        /// Match declaring symbols instead of call-site trees
        #[arg(long)]
        symbols: bool,
    },

    /// List catalog entries and presets
    ListPresets,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for match results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            snapshot,
            format,
            presets,
            symbols,
        } => {
            let project_dir = snapshot
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let project_dir = std::fs::canonicalize(&project_dir).unwrap_or(project_dir);
            let source = config_resolver::resolve(&project_dir, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                presets,
                symbols,
            };
            commands::check::run(&snapshot, &options, &source)
        }
        Commands::ListPresets => {
            commands::list_presets::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
