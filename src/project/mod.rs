//! On-disk project layout and manifest.
//!
//! A tessera project is any directory containing `.tessera/project.yml`.
//!
//! ```text
//! <project>/
//!   .tessera/
//!     project.yml   manifest
//!     assets/       source assets
//!     cache/        derived data, safe to delete
//! ```

pub mod id;
pub mod layout;
pub mod manifest;

pub use id::ProjectId;
pub use layout::ProjectLayout;
pub use manifest::{ProjectManifest, MANIFEST_VERSION};
