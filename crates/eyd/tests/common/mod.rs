#![allow(dead_code)]

use eyd_lib::{ArchiveStats, ArchivedEntry, Archiver, PrunePlan, Result, WalkOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const TIMESTAMP: &str = "2024-01-01T00-00-00";
pub const QUARANTINE_BASE: &str = "/oldroot";

pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let root = temp_dir.path().join("data");
        fs::create_dir_all(&root)?;
        Ok(Self { temp_dir, root })
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }

    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn quarantine(&self, timestamp: &str) -> PathBuf {
        self.path(QUARANTINE_BASE).join(timestamp)
    }

    pub fn plan(&self, keep: &[&str], mounts: &[&str], timestamp: &str) -> Result<PrunePlan> {
        let mounts: Vec<PathBuf> = mounts.iter().map(|m| self.path(m)).collect();
        PrunePlan::build(
            &self.root,
            keep,
            &mounts,
            Path::new(QUARANTINE_BASE),
            timestamp,
        )
    }

    pub fn prune(&self, keep: &[&str], mounts: &[&str]) -> Result<(ArchiveStats, Vec<ArchivedEntry>)> {
        self.prune_at(keep, mounts, TIMESTAMP)
    }

    pub fn prune_at(
        &self,
        keep: &[&str],
        mounts: &[&str],
        timestamp: &str,
    ) -> Result<(ArchiveStats, Vec<ArchivedEntry>)> {
        let plan = self.plan(keep, mounts, timestamp)?;
        let archiver = Archiver::from_plan(plan, WalkOptions::default());
        let mut moved = Vec::new();
        let stats = archiver.run(|entry| moved.push(entry.clone()))?;
        Ok((stats, moved))
    }

    /// Every file and directory below `dir`, relative to it, sorted.
    pub fn tree(&self, dir: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .map(|entry| entry.unwrap().path().strip_prefix(dir).unwrap().to_path_buf())
            .collect();
        paths.sort();
        paths
    }
}
