//! Tessera - project workspace CLI.
//!
//! Tessera resolves a subcommand name to a [`cli::Runner`] and executes it
//! against a project directory.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, runner registry and dispatch
//! - [`context`] - Project path resolution and the invocation context
//! - [`error`] - Error types and result aliases
//! - [`project`] - On-disk project layout and manifest
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use tessera::cli::CommandDispatcher;
//! use tessera::ui::MockUI;
//! use tessera::TesseraError;
//!
//! let dispatcher = CommandDispatcher::new(PathBuf::from("/tmp/unused"));
//! let mut ui = MockUI::new();
//! let err = dispatcher.dispatch("frobnicate", None, &mut ui).unwrap_err();
//! assert!(matches!(err, TesseraError::InvalidSubcommand { .. }));
//! ```

pub mod cli;
pub mod context;
pub mod error;
pub mod project;
pub mod ui;

pub use error::{ProjectError, Result, TesseraError};
