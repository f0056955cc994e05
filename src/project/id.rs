//! Project identification and hashing.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::ProjectError;

/// Stable identifier for a project directory.
///
/// Derived from the canonical absolute path, so the same directory always
/// hashes to the same id regardless of how it was reached (`.`, symlinks,
/// relative `-p` values).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId {
    /// First 8 bytes of SHA256 over the canonical path, hex encoded.
    hash: String,
    path: PathBuf,
}

impl ProjectId {
    /// Create a ProjectId from a project path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized (e.g., doesn't exist).
    pub fn from_path(path: &Path) -> Result<Self, ProjectError> {
        let abs_path = path
            .canonicalize()
            .map_err(|source| ProjectError::io(path, source))?;
        let hash = Self::compute_hash(&abs_path);

        Ok(Self {
            hash,
            path: abs_path,
        })
    }

    /// Get the hash as a string (16 hex chars).
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Get the canonical project path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the directory name, if it is valid UTF-8.
    pub fn dir_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    fn compute_hash(path: &Path) -> String {
        let mut hasher = Sha256::new();
        hasher.update(path.to_string_lossy().as_bytes());
        let result = hasher.finalize();
        hex::encode(&result[..8])
    }
}
