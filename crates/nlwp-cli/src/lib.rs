//! # nlwp-cli — NLWeb Protocol Conformance CLI
//!
//! Provides the `nlwp` command-line interface over the conformance
//! engine:
//!
//! ```bash
//! nlwp validate
//! nlwp validate --spec tsp-output/openapi/openapi.yaml
//! nlwp validate --skip-type-shape
//! ```
//!
//! Exit status: `0` when every evaluated model passes or is not
//! applicable, `1` when any model fails, `2` when a schema source cannot
//! be loaded.

pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it is taken relative to the
/// current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        let root = Path::new("/somewhere/repo");
        assert_eq!(
            resolve_path(Path::new("/etc/hosts"), root),
            PathBuf::from("/etc/hosts")
        );
    }

    #[test]
    fn relative_path_resolves_under_repo_root_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("openapi.yaml"), b"openapi: 3.1.0").unwrap();
        assert_eq!(
            resolve_path(Path::new("openapi.yaml"), dir.path()),
            dir.path().join("openapi.yaml")
        );
    }

    #[test]
    fn missing_relative_path_stays_cwd_relative() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_path(Path::new("no-such.yaml"), dir.path()),
            PathBuf::from("no-such.yaml")
        );
    }
}
