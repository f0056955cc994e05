//! Project path resolution and the invocation context handed to runners.
//!
//! Resolution order:
//! 1. Explicit `--project` flag
//! 2. The process's current working directory
//!
//! Nothing here checks that the path exists or holds a project; that is
//! left to the runner that ends up executing.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TesseraError};

/// Inputs handed to a runner when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    project_path: PathBuf,
    argument: String,
}

impl InvocationContext {
    /// Build a context. A missing argument is stored as an empty string.
    pub fn new(project_path: impl Into<PathBuf>, argument: Option<String>) -> Self {
        Self {
            project_path: project_path.into(),
            argument: argument.unwrap_or_default(),
        }
    }

    /// The resolved project path.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// The free-form argument (empty when none was given).
    pub fn argument(&self) -> &str {
        &self.argument
    }
}

/// Resolve the project path from an optional override, falling back to the
/// current working directory.
///
/// # Errors
///
/// Returns [`TesseraError::EnvironmentResolution`] when no override is given
/// and the working directory cannot be read (deleted, permission denied).
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use tessera::context::resolve_project_path;
///
/// let path = resolve_project_path(Some(PathBuf::from("/tmp/x"))).unwrap();
/// assert_eq!(path, PathBuf::from("/tmp/x"));
/// ```
pub fn resolve_project_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_project_path_with(explicit, std::env::current_dir)
}

/// Resolve with a caller-supplied working directory lookup (for testing).
pub fn resolve_project_path_with<F>(explicit: Option<PathBuf>, current_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => {
            tracing::debug!("Using project path from --project: {}", path.display());
            Ok(path)
        }
        _ => {
            let cwd = current_dir()
                .map_err(|source| TesseraError::EnvironmentResolution { source })?;
            tracing::debug!("Using working directory as project path: {}", cwd.display());
            Ok(cwd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_cwd() -> io::Result<PathBuf> {
        Ok(PathBuf::from("/home/u/work"))
    }

    #[test]
    fn defaults_to_working_directory() {
        let path = resolve_project_path_with(None, fixed_cwd).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/work"));
    }

    #[test]
    fn defaults_to_real_working_directory() {
        let path = resolve_project_path(None).unwrap();
        assert_eq!(path, std::env::current_dir().unwrap());
    }

    #[test]
    fn override_wins_over_working_directory() {
        let path = resolve_project_path_with(Some(PathBuf::from("/tmp/x")), fixed_cwd).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn override_does_not_consult_working_directory() {
        let path = resolve_project_path_with(Some(PathBuf::from("relative/dir")), || {
            panic!("working directory should not be read")
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("relative/dir"));
    }

    #[test]
    fn empty_override_falls_back() {
        let path = resolve_project_path_with(Some(PathBuf::new()), fixed_cwd).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/work"));
    }

    #[test]
    fn unreadable_working_directory_fails() {
        let result = resolve_project_path_with(None, || {
            Err(io::Error::new(io::ErrorKind::NotFound, "directory removed"))
        });

        let err = result.unwrap_err();
        assert!(matches!(err, TesseraError::EnvironmentResolution { .. }));
        assert!(err.to_string().contains("directory removed"));
    }

    #[test]
    fn context_missing_argument_is_empty() {
        let ctx = InvocationContext::new("/tmp/x", None);
        assert_eq!(ctx.argument(), "");
        assert_eq!(ctx, InvocationContext::new("/tmp/x", Some(String::new())));
    }

    #[test]
    fn context_keeps_argument_verbatim() {
        let ctx = InvocationContext::new("/home/u/work", Some("  my project ".into()));
        assert_eq!(ctx.project_path(), Path::new("/home/u/work"));
        assert_eq!(ctx.argument(), "  my project ");
    }
}
