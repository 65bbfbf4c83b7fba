use crate::error::{EydError, Result};
use crate::keep::is_strict_ancestor;
use std::path::{Path, PathBuf};

/// Every mount point currently known to the system.
pub fn system_mounts() -> Result<Vec<PathBuf>> {
    mountpoints::mountpaths()
        .map_err(|e| EydError::MountTable(format!("Failed to enumerate mount points: {:?}", e)))
}

/// Mount points strictly below `root`, sorted and deduplicated.
///
/// `root` must be canonical: the system reports mount points with symlinks resolved.
pub fn mounts_under(root: &Path, mounts: &[PathBuf]) -> Vec<PathBuf> {
    let mut nested: Vec<PathBuf> = mounts
        .iter()
        .filter(|mount| is_strict_ancestor(root, mount))
        .cloned()
        .collect();
    nested.sort();
    nested.dedup();
    nested
}
