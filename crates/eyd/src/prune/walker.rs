use crate::error::Result;
use crate::keep::{classify, KeepSet, WalkAction};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for the prune walk
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Treat a symlink to a directory as a directory when a kept path lies below it.
    pub follow_symlinks: bool,
}

/// Lazy depth-first walk yielding every path under `root` that is not covered by the keep set.
///
/// Each level is listed only when the walker reaches it, and one entry is materialized per
/// call to `next`, so callers may move yielded paths before asking for the next one. Yielded
/// entries are never descended into. Filesystem iteration order is preserved.
///
/// An entry classified [`WalkAction::Recurse`] that is not a directory is dropped without
/// being yielded.
pub struct TreeWalker<'a> {
    keep: &'a KeepSet,
    options: WalkOptions,
    stack: Vec<walkdir::IntoIter>,
}

impl<'a> TreeWalker<'a> {
    pub fn new<P: AsRef<Path>>(root: P, keep: &'a KeepSet, options: WalkOptions) -> Self {
        let root = root.as_ref();
        let mut walker = Self {
            keep,
            options,
            stack: Vec::new(),
        };

        if keep.covers(root) {
            log::info!("Root {} is covered by the keep set, nothing to walk", root.display());
        } else {
            walker.descend(root);
        }

        walker
    }

    fn descend(&mut self, dir: &Path) {
        let level = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.options.follow_symlinks)
            .into_iter();
        self.stack.push(level);
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            let entry = match level.next() {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => return Some(Err(e.into())),
                Some(Ok(entry)) => entry,
            };

            let action = classify(entry.path(), self.keep.as_slice());
            log::trace!("{}: {}", action.as_str(), entry.path().display());
            match action {
                WalkAction::Yield => return Some(Ok(entry.into_path())),
                WalkAction::Skip => {
                    log::debug!("Keeping {}", entry.path().display());
                }
                WalkAction::Recurse => {
                    if entry.file_type().is_dir() {
                        log::debug!("Descending into {}", entry.path().display());
                        self.descend(entry.path());
                    } else {
                        log::debug!(
                            "Ignoring {}: a kept path lies below it but it is not a directory",
                            entry.path().display()
                        );
                    }
                }
            }
        }
    }
}
