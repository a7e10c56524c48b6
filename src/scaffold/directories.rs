//! Directory layout creation.
use crate::error::ScaffoldError;
use std::fs;
use std::path::{Path, PathBuf};

/// Create each relative directory (and its missing ancestors) under `root`.
///
/// Directories that already exist are left alone. Returns the ones that were
/// missing before the call, in input order.
pub fn ensure_directories(root: &Path, dirs: &[&str]) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut created = Vec::new();
    for rel in dirs {
        let dir = root.join(rel);
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::fs(&dir, source))?;
        tracing::debug!(path = %dir.display(), "created directory");
        created.push(dir);
    }
    Ok(created)
}
