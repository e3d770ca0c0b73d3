//! lidder CLI tool.
//!
//! Usage:
//! ```bash
//! lidder check [OPTIONS] [FILE]
//! lidder list-rules
//! lidder init
//! ```
//!
//! Exit codes: 0 when every rule passes, 2 when any rule has mismatches,
//! 1 for configuration and IO errors.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Keeps discouraged code patterns confined to an explicit allow-list of files
#[derive(Parser)]
#[command(name = "lidder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (TOML, or YAML by extension)
    #[arg(short, long, global = true, env = "LIDDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that lidded patterns only occur where expected
    Check {
        /// Check only this file (falls back to the whole tree if the file
        /// is not selected by include/exclude)
        file: Option<PathBuf>,

        /// Directory to scan in full-tree mode
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List configured rules and their expected files
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,

        /// Write `lidder.yaml` instead of `lidder.toml`
        #[arg(long)]
        yaml: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-mismatch compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Check { file, root, format } => {
            let source = config_resolver::resolve(&cwd, cli.config.as_deref());
            let passed = commands::check::run(file.as_deref(), &root, format, &source)?;
            if !passed {
                std::process::exit(commands::check::POLICY_FAILURE_EXIT_CODE);
            }
            Ok(())
        }
        Commands::ListRules => {
            let source = config_resolver::resolve(&cwd, cli.config.as_deref());
            commands::list_rules::run(&source)
        }
        Commands::Init { force, yaml } => commands::init::run(&cwd, force, yaml),
    }
}
