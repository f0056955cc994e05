//! Error types for Tessera operations.
//!
//! This module defines [`TesseraError`], the error type surfaced at the
//! process boundary, [`ProjectError`] for failures inside project runners,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `TesseraError` discriminates the three ways an invocation can fail
//! - Runners return `anyhow::Error`; the dispatcher relays it untouched
//! - Runner-specific causes (like [`ProjectError`]) can be recovered with
//!   `anyhow::Error::downcast_ref`

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for environment and runner failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for usage errors (matches clap's own usage exit code).
pub const EXIT_USAGE: i32 = 2;

/// Core error type for a single CLI invocation.
#[derive(Debug, Error)]
pub enum TesseraError {
    /// The working directory could not be determined and no `-p` was given.
    #[error("Cannot determine project path: {source}")]
    EnvironmentResolution {
        #[source]
        source: std::io::Error,
    },

    /// The requested subcommand is not registered.
    #[error("Unknown subcommand '{name}' (expected one of: {known})")]
    InvalidSubcommand { name: String, known: String },

    /// Failure returned by the executed runner, relayed verbatim.
    #[error(transparent)]
    Runner(anyhow::Error),
}

impl TesseraError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSubcommand { .. } => EXIT_USAGE,
            Self::EnvironmentResolution { .. } | Self::Runner(_) => EXIT_FAILURE,
        }
    }
}

/// Errors raised while initializing or reading a project.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project manifest already exists.
    #[error("project already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    /// The project path points at something other than a directory.
    #[error("project path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// No manifest found where one was expected.
    #[error("not a tessera project (missing {path})")]
    NotInitialized { path: PathBuf },

    /// The requested project name cannot be used.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Failed to parse or serialize the manifest.
    #[error("Failed to parse manifest at {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Filesystem access failed.
    #[error("Failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProjectError {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Tessera operations.
pub type Result<T> = std::result::Result<T, TesseraError>;
