pub mod archiver;
pub mod plan;
pub mod walker;

pub use archiver::{ArchiveStats, ArchivedEntry, Archiver};
pub use plan::PrunePlan;
pub use walker::{TreeWalker, WalkOptions};
