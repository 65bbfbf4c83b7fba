pub mod classify;
pub mod normalize;

pub use classify::{classify, WalkAction};
pub use normalize::normalize_keep;

use std::path::{Path, PathBuf};

/// Returns true when `path` lies strictly below `ancestor`.
///
/// Comparison is per path component, so `/a` is an ancestor of `/a/b` but never of `/ab`.
/// A path is not its own ancestor.
pub fn is_strict_ancestor(ancestor: &Path, path: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

/// A minimal, sorted set of absolute paths that must stay in place.
///
/// No element is a strict descendant of another. Elements are ordered by their raw byte
/// representation. The only way to build one is [`normalize_keep`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet {
    paths: Vec<PathBuf>,
}

impl KeepSet {
    pub(crate) fn from_sorted(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// True when `path` equals a kept path or lies anywhere beneath one.
    pub fn covers(&self, path: &Path) -> bool {
        self.paths.iter().any(|kept| path.starts_with(kept))
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a KeepSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
