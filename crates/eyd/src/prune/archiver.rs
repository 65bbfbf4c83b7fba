use crate::error::{EydError, Result};
use crate::keep::KeepSet;
use crate::prune::{PrunePlan, TreeWalker, WalkOptions};
use crate::util::format_duration;
use std::fs::{self, DirBuilder};
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Mode for directories created inside the quarantine.
const QUARANTINE_DIR_MODE: u32 = 0o700;

/// A single completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ArchiveStats {
    pub entries_moved: usize,
    pub quarantine_cleared: bool,
    pub elapsed: Duration,
}

/// Moves every unkept path under the root into the quarantine, preserving relative layout.
///
/// Entries are moved one at a time, in walk order, as soon as the walker yields them. The
/// first failure aborts the run; entries already moved stay in the quarantine.
pub struct Archiver {
    root: PathBuf,
    quarantine: PathBuf,
    keep: KeepSet,
    options: WalkOptions,
}

impl Archiver {
    pub fn new(root: impl Into<PathBuf>, quarantine: impl Into<PathBuf>, keep: KeepSet) -> Self {
        Self {
            root: root.into(),
            quarantine: quarantine.into(),
            keep,
            options: WalkOptions::default(),
        }
    }

    pub fn from_plan(plan: PrunePlan, options: WalkOptions) -> Self {
        let (root, quarantine, keep) = plan.into_parts();
        Self::new(root, quarantine, keep).with_options(options)
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Removes a directory left at the quarantine target by an earlier run.
    ///
    /// Returns whether anything was removed. A non-directory at the target is an error.
    pub fn prepare(&self) -> Result<bool> {
        match fs::symlink_metadata(&self.quarantine) {
            Ok(metadata) if metadata.is_dir() => {
                log::warn!(
                    "Removing existing quarantine directory {}",
                    self.quarantine.display()
                );
                fs::remove_dir_all(&self.quarantine)?;
                Ok(true)
            }
            Ok(_) => Err(EydError::QuarantineNotDirectory(self.quarantine.clone())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Clears the quarantine target, then walks and moves. `on_move` sees each completed move.
    pub fn run<F>(&self, mut on_move: F) -> Result<ArchiveStats>
    where
        F: FnMut(&ArchivedEntry),
    {
        let start = Instant::now();
        let mut stats = ArchiveStats {
            quarantine_cleared: self.prepare()?,
            ..Default::default()
        };

        log::info!(
            "Archiving {} into {} ({} kept path(s))",
            self.root.display(),
            self.quarantine.display(),
            self.keep.len()
        );

        for source in TreeWalker::new(&self.root, &self.keep, self.options.clone()) {
            let source = source?;
            let entry = self.archive_entry(&source)?;
            on_move(&entry);
            stats.entries_moved += 1;
        }

        stats.elapsed = start.elapsed();
        log::info!(
            "Archived {} entries in {}",
            stats.entries_moved,
            format_duration(stats.elapsed)
        );

        Ok(stats)
    }

    /// Where `source` lands inside the quarantine.
    pub fn destination_for(&self, source: &Path) -> Result<PathBuf> {
        let relative = source
            .strip_prefix(&self.root)
            .map_err(|_| EydError::OutsideRoot {
                path: source.to_path_buf(),
                root: self.root.clone(),
            })?;
        Ok(self.quarantine.join(relative))
    }

    /// Moves one entry into the quarantine, creating missing parent directories.
    pub fn archive_entry(&self, source: &Path) -> Result<ArchivedEntry> {
        let destination = self.destination_for(source)?;

        if let Some(parent) = destination.parent() {
            if !parent.is_dir() {
                DirBuilder::new()
                    .recursive(true)
                    .mode(QUARANTINE_DIR_MODE)
                    .create(parent)?;
            }
        }

        if fs::symlink_metadata(&destination).is_ok() {
            return Err(EydError::DestinationExists(destination));
        }

        log::debug!("Moving {} to {}", source.display(), destination.display());
        fs::rename(source, &destination).map_err(|error| EydError::MoveFailed {
            source_path: source.to_path_buf(),
            destination: destination.clone(),
            error,
        })?;

        Ok(ArchivedEntry {
            source: source.to_path_buf(),
            destination,
        })
    }
}
