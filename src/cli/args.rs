//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lectern configuration - inspect and validate the effective configuration
#[derive(Parser, Debug)]
#[command(name = "lectern-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Instance override file path
    #[arg(short, long, global = true, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration (secrets redacted)
    Show(ShowArgs),

    /// Validate the effective configuration
    Check,

    /// List the periodic background jobs
    Schedule,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Emit JSON instead of the debug representation
    #[arg(long)]
    pub json: bool,
}
