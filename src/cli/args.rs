//! CLI argument definitions.
//!
//! The subcommand is taken as a plain positional string rather than a clap
//! subcommand enum: selection happens in the dispatcher's registry so that
//! unknown names surface as [`crate::TesseraError::InvalidSubcommand`].

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Tessera - project workspace CLI.
#[derive(Debug, Parser)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Subcommand to run
    #[arg(value_name = "SUBCOMMAND")]
    pub subcommand: String,

    /// Argument passed to the subcommand (must be valid UTF-8)
    #[arg(value_name = "ARGUMENT")]
    pub argument: Option<String>,
}

impl Cli {
    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.quiet, self.verbose)
    }
}
