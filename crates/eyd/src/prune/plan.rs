use crate::error::{EydError, Result};
use crate::keep::{is_strict_ancestor, normalize_keep, KeepSet};
use crate::system::quarantine_target;
use std::path::{Component, Path, PathBuf};

/// The resolved inputs of one prune run: what to walk, what to keep, and where moves land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    root: PathBuf,
    quarantine: PathBuf,
    keep: KeepSet,
}

impl PrunePlan {
    /// Builds the final keep set in two passes.
    ///
    /// The first pass resolves the user fragments and the quarantine base against `root`.
    /// The second pass merges in every mount point strictly below `root` and normalizes the
    /// union against `/`, so the walk never enters another filesystem. Mount points equal to
    /// or above `root` are ignored.
    pub fn build<I, P>(
        root: &Path,
        fragments: I,
        mounts: &[PathBuf],
        quarantine_base: &Path,
        timestamp: &str,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        if !root.is_absolute() {
            return Err(EydError::Config(format!(
                "Root must be an absolute path: {}",
                root.display()
            )));
        }
        if root.components().any(|c| c == Component::ParentDir) {
            return Err(EydError::Config(format!(
                "Root must not contain '..' components: {}",
                root.display()
            )));
        }
        let root: PathBuf = root.components().collect();
        let quarantine = quarantine_target(&root, quarantine_base, timestamp)?;

        let mut first_pass: Vec<PathBuf> = fragments
            .into_iter()
            .map(|fragment| fragment.as_ref().to_path_buf())
            .collect();
        first_pass.push(quarantine_base.to_path_buf());
        let scoped = normalize_keep(&root, &first_pass)?;

        let nested_mounts: Vec<&PathBuf> = mounts
            .iter()
            .filter(|mount| is_strict_ancestor(&root, mount))
            .collect();
        log::debug!(
            "{} of {} mount point(s) lie under {}",
            nested_mounts.len(),
            mounts.len(),
            root.display()
        );

        let mut second_pass = scoped.into_vec();
        second_pass.extend(nested_mounts.into_iter().cloned());
        let keep = normalize_keep(Path::new("/"), &second_pass)?;

        if !keep.covers(&quarantine) {
            return Err(EydError::Config(format!(
                "Quarantine {} is not covered by the keep set",
                quarantine.display()
            )));
        }

        for kept in &keep {
            log::info!("Keeping {}", kept.display());
        }

        Ok(Self {
            root,
            quarantine,
            keep,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn quarantine(&self) -> &Path {
        &self.quarantine
    }

    pub fn keep(&self) -> &KeepSet {
        &self.keep
    }

    pub fn into_parts(self) -> (PathBuf, PathBuf, KeepSet) {
        (self.root, self.quarantine, self.keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep_strings(plan: &PrunePlan) -> Vec<String> {
        plan.keep()
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_plan_adds_quarantine_base() {
        let plan = PrunePlan::build(
            Path::new("/data"),
            ["/keep"],
            &[],
            Path::new("/oldroot"),
            "2024-05-01T12-30-00",
        )
        .unwrap();

        assert_eq!(plan.root(), Path::new("/data"));
        assert_eq!(
            plan.quarantine(),
            Path::new("/data/oldroot/2024-05-01T12-30-00")
        );
        assert_eq!(keep_strings(&plan), vec!["/data/keep", "/data/oldroot"]);
    }

    #[test]
    fn test_plan_merges_nested_mounts() {
        let mounts = vec![
            PathBuf::from("/"),
            PathBuf::from("/data"),
            PathBuf::from("/data/nix"),
            PathBuf::from("/data/keep/inner"),
            PathBuf::from("/boot"),
        ];
        let plan = PrunePlan::build(
            Path::new("/data"),
            ["/keep"],
            &mounts,
            Path::new("/oldroot"),
            "2024-05-01T12-30-00",
        )
        .unwrap();

        assert_eq!(
            keep_strings(&plan),
            vec!["/data/keep", "/data/nix", "/data/oldroot"]
        );
    }

    #[test]
    fn test_plan_root_mount_is_not_a_boundary() {
        let mounts = vec![PathBuf::from("/data")];
        let plan = PrunePlan::build(
            Path::new("/data"),
            Vec::<String>::new(),
            &mounts,
            Path::new("/oldroot"),
            "2024-05-01T12-30-00",
        )
        .unwrap();

        assert_eq!(keep_strings(&plan), vec!["/data/oldroot"]);
    }

    #[test]
    fn test_plan_trailing_slash_root() {
        let plan = PrunePlan::build(
            Path::new("/data/"),
            ["etc"],
            &[PathBuf::from("/data/nix")],
            Path::new("oldroot"),
            "ts",
        )
        .unwrap();

        assert_eq!(plan.root(), Path::new("/data"));
        assert_eq!(
            keep_strings(&plan),
            vec!["/data/etc", "/data/nix", "/data/oldroot"]
        );
    }

    #[test]
    fn test_plan_rejects_relative_root() {
        let err = PrunePlan::build(
            Path::new("data"),
            Vec::<String>::new(),
            &[],
            Path::new("/oldroot"),
            "ts",
        )
        .unwrap_err();
        assert!(matches!(err, EydError::Config(_)));
    }

    #[test]
    fn test_plan_rejects_parent_components_in_root() {
        let err = PrunePlan::build(
            Path::new("/data/../data"),
            Vec::<String>::new(),
            &[],
            Path::new("/oldroot"),
            "ts",
        )
        .unwrap_err();
        assert!(matches!(err, EydError::Config(_)));
    }

    #[test]
    fn test_plan_rejects_escaping_fragment() {
        let err = PrunePlan::build(
            Path::new("/data"),
            ["/../etc"],
            &[],
            Path::new("/oldroot"),
            "ts",
        )
        .unwrap_err();
        assert!(matches!(err, EydError::InvalidKeepPath { .. }));
    }
}
