use crate::error::{EydError, Result};
use crate::prune::WalkOptions;
use std::path::{Component, PathBuf};

pub const DEFAULT_QUARANTINE_BASE: &str = "/oldroot";

pub struct Config {
    pub root: PathBuf,
    /// Root-relative directory holding one timestamped quarantine per run.
    pub quarantine_base: PathBuf,
    pub walk: WalkOptions,
}

impl Config {
    pub fn new(root: PathBuf, quarantine_override: Option<PathBuf>, follow_symlinks: bool) -> Self {
        let quarantine_base = if let Some(path) = quarantine_override {
            path
        } else if let Ok(env_path) = std::env::var("EYD_QUARANTINE_BASE") {
            PathBuf::from(env_path)
        } else {
            PathBuf::from(DEFAULT_QUARANTINE_BASE)
        };

        Self {
            root,
            quarantine_base,
            walk: WalkOptions { follow_symlinks },
        }
    }

    /// Checks the settings and replaces `root` with its canonical path.
    ///
    /// Mount points are reported with symlinks resolved, so a root reached through a symlink
    /// or `..` would otherwise never contain any of them.
    pub fn validate(&mut self) -> Result<()> {
        if !self.root.is_absolute() {
            return Err(EydError::Config(format!(
                "Root must be an absolute path: {}",
                self.root.display()
            )));
        }

        let canonical = std::fs::canonicalize(&self.root).map_err(|e| {
            EydError::Config(format!("Cannot resolve root {}: {}", self.root.display(), e))
        })?;
        if !canonical.is_dir() {
            return Err(EydError::Config(format!(
                "Root is not a directory: {}",
                self.root.display()
            )));
        }
        if canonical != self.root {
            log::info!("Resolved root {} to {}", self.root.display(), canonical.display());
            self.root = canonical;
        }

        let mut has_name = false;
        for component in self.quarantine_base.components() {
            match component {
                Component::Normal(_) => has_name = true,
                Component::RootDir | Component::CurDir => {}
                _ => {
                    return Err(EydError::Config(format!(
                        "Quarantine base must stay inside the root: {}",
                        self.quarantine_base.display()
                    )))
                }
            }
        }
        if !has_name {
            return Err(EydError::Config(
                "Quarantine base must name a directory below the root".to_string(),
            ));
        }

        Ok(())
    }
}
