//! Command-line interface for Tessera.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Runner registry, dispatcher and runner implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{CommandDispatcher, Runner, RunnerEntry, BUILTIN_RUNNERS};

use crate::context::resolve_project_path;
use crate::error::Result;
use crate::ui::UserInterface;

/// Resolve the project path and dispatch the requested subcommand.
///
/// This is everything `main` does between parsing arguments and mapping the
/// outcome to an exit code.
pub fn run(cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
    let project_root = resolve_project_path(cli.project.clone())?;
    let dispatcher = CommandDispatcher::new(project_root);
    dispatcher.dispatch(&cli.subcommand, cli.argument.clone(), ui)
}
