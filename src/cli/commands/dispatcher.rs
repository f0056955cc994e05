//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Runner`] trait for implementing subcommands
//! - [`CommandDispatcher`] for routing a subcommand name to its runner

use std::path::{Path, PathBuf};

use crate::context::InvocationContext;
use crate::error::{Result, TesseraError};
use crate::ui::UserInterface;

use super::registry::{known_names, RunnerEntry, BUILTIN_RUNNERS};

/// Trait for subcommand implementations.
///
/// A runner is built from an [`InvocationContext`] and executed exactly once.
/// Whatever it returns as an error is shown to the user unchanged.
pub trait Runner {
    /// Execute the subcommand.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    fn execute(&self, ui: &mut dyn UserInterface) -> anyhow::Result<()>;
}

/// Dispatches subcommand names to their runners.
pub struct CommandDispatcher<'r> {
    project_root: PathBuf,
    runners: &'r [RunnerEntry],
}

impl CommandDispatcher<'static> {
    /// Create a new dispatcher for the given project root using the builtin runners.
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_runners(project_root, BUILTIN_RUNNERS)
    }
}

impl<'r> CommandDispatcher<'r> {
    /// Create a dispatcher over a custom runner table.
    pub fn with_runners(project_root: PathBuf, runners: &'r [RunnerEntry]) -> Self {
        Self {
            project_root,
            runners,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Look up a runner by exact, case-sensitive name.
    pub fn select(&self, name: &str) -> Result<&'r RunnerEntry> {
        self.runners
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| TesseraError::InvalidSubcommand {
                name: name.to_string(),
                known: known_names(self.runners),
            })
    }

    /// Dispatch and execute a subcommand.
    ///
    /// Selects the runner, builds it with the project root and `argument`
    /// (absent is the same as empty), and executes it once. A runner failure
    /// comes back as [`TesseraError::Runner`] holding the original error.
    pub fn dispatch(
        &self,
        name: &str,
        argument: Option<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let entry = self.select(name)?;
        let ctx = InvocationContext::new(self.project_root.clone(), argument);

        tracing::debug!(
            "Dispatching '{}' for {} with argument {:?}",
            entry.name,
            ctx.project_path().display(),
            ctx.argument()
        );

        let runner = (entry.build)(ctx);
        runner.execute(ui).map_err(TesseraError::Runner)
    }
}
