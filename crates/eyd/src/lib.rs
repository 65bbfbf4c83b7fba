pub mod config;
pub mod error;
pub mod keep;
pub mod prune;
pub mod system;
pub mod util;

pub use config::Config;
pub use error::{EydError, Result};
pub use keep::{classify, is_strict_ancestor, normalize_keep, KeepSet, WalkAction};
pub use prune::{ArchiveStats, ArchivedEntry, Archiver, PrunePlan, TreeWalker, WalkOptions};
pub use system::{mounts_under, quarantine_target, quarantine_timestamp, system_mounts};
