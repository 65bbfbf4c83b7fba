use crate::keep::is_strict_ancestor;
use std::path::{Path, PathBuf};

/// What the walker does with a single directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    /// The entry is kept as a whole; nothing below it is visited.
    Skip,
    /// A kept path lies below the entry; its children must be inspected.
    Recurse,
    /// Nothing under the entry is kept; it is archived as a whole.
    Yield,
}

impl WalkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkAction::Skip => "skip",
            WalkAction::Recurse => "recurse",
            WalkAction::Yield => "yield",
        }
    }
}

/// Classifies `entry` against a normalized keep list.
///
/// The first keep element that equals the entry or lies beneath it decides the outcome.
pub fn classify(entry: &Path, keep: &[PathBuf]) -> WalkAction {
    for kept in keep {
        if entry == kept.as_path() {
            return WalkAction::Skip;
        }
        if is_strict_ancestor(entry, kept) {
            return WalkAction::Recurse;
        }
    }
    WalkAction::Yield
}
