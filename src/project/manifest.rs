//! Project manifest (`.tessera/project.yml`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::{ProjectId, ProjectLayout};
use crate::error::ProjectError;

/// Current manifest schema version.
pub const MANIFEST_VERSION: u32 = 1;

/// Metadata written by `tessera init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Schema version for migration.
    pub version: u32,

    /// Human-readable project name.
    pub name: String,

    /// Hash of the project location (see [`ProjectId`]).
    pub id: String,

    /// When the project was initialized.
    pub created_at: DateTime<Utc>,

    /// Assets directory, relative to `.tessera/`.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_assets_dir() -> String {
    ProjectLayout::assets_dir_name().to_string()
}

impl ProjectManifest {
    /// Create a manifest for a freshly initialized project.
    pub fn new(name: impl Into<String>, id: &ProjectId) -> Self {
        Self {
            version: MANIFEST_VERSION,
            name: name.into(),
            id: id.hash().to_string(),
            created_at: Utc::now(),
            assets_dir: default_assets_dir(),
        }
    }

    /// Load the manifest of the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ProjectError> {
        let path = ProjectLayout::new(root).manifest_path();
        if !path.is_file() {
            return Err(ProjectError::NotInitialized { path });
        }

        let content =
            fs::read_to_string(&path).map_err(|source| ProjectError::io(path.clone(), source))?;
        serde_yaml::from_str(&content).map_err(|source| ProjectError::Manifest { path, source })
    }

    /// Write the manifest into the project rooted at `root`.
    ///
    /// The `.tessera` directory must already exist. An existing manifest is
    /// never overwritten; the first writer wins and later ones get
    /// [`ProjectError::AlreadyInitialized`].
    pub fn save(&self, root: &Path) -> Result<(), ProjectError> {
        let path = ProjectLayout::new(root).manifest_path();
        let content = serde_yaml::to_string(self).map_err(|source| ProjectError::Manifest {
            path: path.clone(),
            source,
        })?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => {
                return Err(ProjectError::AlreadyInitialized { path });
            }
            Err(source) => return Err(ProjectError::io(path, source)),
        };
        file.write_all(content.as_bytes())
            .map_err(|source| ProjectError::io(path.clone(), source))?;
        Ok(())
    }
}
