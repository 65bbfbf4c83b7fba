use crate::error::{EydError, Result};
use crate::keep::{is_strict_ancestor, KeepSet};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Resolves keep fragments against `base` into a minimal, sorted [`KeepSet`].
///
/// Each fragment is read relative to `base`; a leading `/` is the base marker, so `"/etc"`
/// and `"etc"` both denote `base/etc`, and `"/"` denotes `base` itself. A fragment with
/// another fragment as its strict ancestor is dropped, since keeping the ancestor already
/// keeps it.
///
/// Fails with [`EydError::InvalidKeepPath`] if a fragment contains `..`.
pub fn normalize_keep<I, P>(base: &Path, fragments: I) -> Result<KeepSet>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let base: PathBuf = base.components().collect();
    let relative = fragments
        .into_iter()
        .map(|fragment| relative_fragment(fragment.as_ref()))
        .collect::<Result<BTreeSet<PathBuf>>>()?;

    let mut paths: Vec<PathBuf> = relative
        .iter()
        .filter(|fragment| !relative.iter().any(|other| is_strict_ancestor(other, fragment)))
        .map(|fragment| {
            if fragment.as_os_str().is_empty() {
                base.clone()
            } else {
                base.join(fragment)
            }
        })
        .collect();

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.dedup();

    log::debug!("Normalized {} keep path(s) under {}", paths.len(), base.display());
    Ok(KeepSet::from_sorted(paths))
}

pub(crate) fn relative_fragment(fragment: &Path) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in fragment.components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => {
                return Err(EydError::InvalidKeepPath {
                    path: fragment.display().to_string(),
                    reason: "parent directory components are not allowed".to_string(),
                })
            }
            Component::Prefix(_) => {
                return Err(EydError::InvalidKeepPath {
                    path: fragment.display().to_string(),
                    reason: "path prefixes are not supported".to_string(),
                })
            }
        }
    }
    Ok(relative)
}
