//! Init runner implementation.
//!
//! `tessera init [NAME]` creates the `.tessera` tree and writes the project
//! manifest. The name defaults to the project directory's name.

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::context::InvocationContext;
use crate::error::ProjectError;
use crate::project::{ProjectId, ProjectLayout, ProjectManifest};
use crate::ui::UserInterface;

use super::dispatcher::Runner;

/// Name used when neither the argument nor the directory provides one.
const FALLBACK_NAME: &str = "tessera-project";

/// The init runner.
pub struct InitRunner {
    ctx: InvocationContext,
}

impl InitRunner {
    /// Create a new init runner.
    pub fn new(ctx: InvocationContext) -> Self {
        Self { ctx }
    }

    /// Registry constructor.
    pub fn boxed(ctx: InvocationContext) -> Box<dyn Runner> {
        Box::new(Self::new(ctx))
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.ctx.project_path()
    }

    /// Create the project root if needed and reject non-directories.
    fn ensure_root(&self) -> anyhow::Result<()> {
        let root = self.project_root();
        if root.exists() {
            if !root.is_dir() {
                return Err(ProjectError::NotADirectory {
                    path: root.to_path_buf(),
                }
                .into());
            }
            return Ok(());
        }

        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create project directory {}", root.display()))?;
        tracing::debug!("Created project directory {}", root.display());
        Ok(())
    }

    /// The trimmed argument, validated, or `None` when it is blank.
    fn requested_name(&self) -> Result<Option<&str>, ProjectError> {
        let requested = self.ctx.argument().trim();
        if requested.is_empty() {
            return Ok(None);
        }
        validate_name(requested)?;
        Ok(Some(requested))
    }

    /// Append the cache directory to an existing `.gitignore`.
    fn update_gitignore(&self, ui: &mut dyn UserInterface) -> anyhow::Result<()> {
        let entry = ProjectLayout::cache_ignore_entry();
        let gitignore_path = self.project_root().join(".gitignore");

        if !gitignore_path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&gitignore_path)
            .with_context(|| format!("Failed to read {}", gitignore_path.display()))?;
        if content.lines().any(|line| line.trim() == entry) {
            return Ok(());
        }

        let new_content = if content.is_empty() || content.ends_with('\n') {
            format!("{}{}\n", content, entry)
        } else {
            format!("{}\n{}\n", content, entry)
        };
        fs::write(&gitignore_path, new_content)
            .with_context(|| format!("Failed to update {}", gitignore_path.display()))?;
        ui.message(&format!("Added {} to .gitignore", entry));

        Ok(())
    }
}

/// Reject names that cannot be used as a single path component.
fn validate_name(name: &str) -> Result<(), ProjectError> {
    let reason = if name.contains(['/', '\\']) {
        "contains a path separator"
    } else if name.chars().any(char::is_control) {
        "contains control characters"
    } else if name == "." || name == ".." {
        "is a relative path component"
    } else {
        return Ok(());
    };

    Err(ProjectError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

impl Runner for InitRunner {
    fn execute(&self, ui: &mut dyn UserInterface) -> anyhow::Result<()> {
        let layout = ProjectLayout::new(self.project_root());

        if layout.is_initialized() {
            return Err(ProjectError::AlreadyInitialized {
                path: layout.manifest_path(),
            }
            .into());
        }

        let requested = self.requested_name()?;
        self.ensure_root()?;

        let id = ProjectId::from_path(layout.root())?;
        let name = requested
            .or_else(|| id.dir_name())
            .unwrap_or(FALLBACK_NAME)
            .to_string();

        for dir in [layout.assets_dir(), layout.cache_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            tracing::debug!("Created {}", dir.display());
        }

        let manifest = ProjectManifest::new(&name, &id);
        manifest.save(layout.root())?;
        tracing::info!("Initialized project '{}' ({})", name, manifest.id);

        self.update_gitignore(ui)?;

        ui.success(&format!(
            "Initialized tessera project '{}' in {}",
            name,
            layout.root().display()
        ));
        if ui.output_mode().shows_details() {
            ui.message(&format!("  manifest: {}", layout.manifest_path().display()));
            ui.message(&format!("  assets:   {}", layout.assets_dir().display()));
            ui.message(&format!("  cache:    {}", layout.cache_dir().display()));
        }

        Ok(())
    }
}
