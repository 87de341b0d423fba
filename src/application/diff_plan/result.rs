//! Diff Result

use std::path::PathBuf;

use crate::domain::value_objects::PlanDigest;

/// Line counts of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub insertions: usize,
    pub deletions: usize,
}

/// Result of a diff operation
#[derive(Debug, Clone)]
pub struct DiffResult {
    pub against: PathBuf,
    pub current_digest: PlanDigest,
    /// Digest recorded in the earlier plan, when it has one
    pub previous_digest: Option<String>,
    /// Unified diff, empty when nothing changed
    pub unified: String,
    pub stats: DiffStats,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.stats.insertions > 0 || self.stats.deletions > 0
    }
}
