//! CLI runner implementations.
//!
//! Each subcommand implements the [`Runner`] trait and is listed once in
//! [`BUILTIN_RUNNERS`]. [`CommandDispatcher`] looks the requested name up in
//! that table, builds the runner and executes it.

pub mod dispatcher;
pub mod init;
pub mod registry;

pub use dispatcher::{CommandDispatcher, Runner};
pub use registry::{known_names, subcommand_help, RunnerEntry, BUILTIN_RUNNERS};
