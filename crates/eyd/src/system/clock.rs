use crate::error::{EydError, Result};
use crate::keep::normalize::relative_fragment;
use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};

/// Quarantine directory names sort chronologically and contain no `:`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

pub fn quarantine_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds `root/<base>/<timestamp>`, where `base` is read relative to `root`.
pub fn quarantine_target(root: &Path, base: &Path, timestamp: &str) -> Result<PathBuf> {
    let base = relative_fragment(base)?;
    if base.as_os_str().is_empty() {
        return Err(EydError::Config(
            "Quarantine base must not be the root itself".to_string(),
        ));
    }

    let mut components = Path::new(timestamp).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            return Err(EydError::Config(format!(
                "Invalid quarantine timestamp: {:?}",
                timestamp
            )))
        }
    }

    Ok(root.join(base).join(timestamp))
}
