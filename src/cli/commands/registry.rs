//! Static table of known subcommands.

use crate::context::InvocationContext;

use super::dispatcher::Runner;
use super::init::InitRunner;

/// Constructor for a runner variant.
pub type RunnerFactory = fn(InvocationContext) -> Box<dyn Runner>;

/// One registered subcommand.
#[derive(Debug, Clone, Copy)]
pub struct RunnerEntry {
    /// Exact, case-sensitive name typed on the command line.
    pub name: &'static str,
    /// One-line description shown in `--help`.
    pub about: &'static str,
    /// Builds the runner from the invocation context.
    pub build: RunnerFactory,
}

/// Every subcommand the binary knows about.
///
/// Adding a subcommand means implementing [`Runner`] and adding one entry.
pub static BUILTIN_RUNNERS: &[RunnerEntry] = &[RunnerEntry {
    name: "init",
    about: "Initialize a tessera project [ARGUMENT: project name]",
    build: InitRunner::boxed,
}];

/// Comma-separated names, for error messages.
pub fn known_names(runners: &[RunnerEntry]) -> String {
    runners
        .iter()
        .map(|entry| entry.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// "Subcommands:" help section listing each entry.
pub fn subcommand_help(runners: &[RunnerEntry]) -> String {
    let width = runners.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut help = String::from("Subcommands:\n");
    for entry in runners {
        help.push_str(&format!("  {:<width$}  {}\n", entry.name, entry.about));
    }
    help
}
