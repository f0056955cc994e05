//! Paths inside a project's `.tessera` directory.

use std::path::{Path, PathBuf};

/// Name of the metadata directory at the project root.
pub const TESSERA_DIR: &str = ".tessera";

const MANIFEST_FILE: &str = "project.yml";
const ASSETS_DIR: &str = "assets";
const CACHE_DIR: &str = "cache";

/// Resolves every well-known path of a project from its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tessera_dir(&self) -> PathBuf {
        self.root.join(TESSERA_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.tessera_dir().join(MANIFEST_FILE)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.tessera_dir().join(ASSETS_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.tessera_dir().join(CACHE_DIR)
    }

    /// Relative assets directory as recorded in the manifest.
    pub fn assets_dir_name() -> &'static str {
        ASSETS_DIR
    }

    /// `.gitignore` entry that keeps derived data out of version control.
    pub fn cache_ignore_entry() -> String {
        format!("{}/{}/", TESSERA_DIR, CACHE_DIR)
    }

    /// Check if the project has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.manifest_path().is_file()
    }
}
