//! Outcome counters for a backfill run.

use std::fmt;

use serde::Serialize;

/// Counts collected over one backfill run.
///
/// Every candidate ends up in exactly one of `updated`, `missing`, or
/// `errors`. `committed` is the number of rows the final transaction changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    pub candidates: usize,
    pub updated: usize,
    pub missing: usize,
    pub errors: usize,
    pub committed: usize,
}

impl BackfillReport {
    /// Empty report for a run over `candidates` rows.
    pub fn new(candidates: usize) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    /// Candidates neither updated nor failed.
    pub fn skipped(&self) -> usize {
        self.candidates
            .saturating_sub(self.updated)
            .saturating_sub(self.errors)
    }

    /// True when every candidate was updated.
    pub fn is_complete(&self) -> bool {
        self.updated == self.candidates
    }
}

impl fmt::Display for BackfillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Update complete:")?;
        writeln!(f, "  - Total images processed: {}", self.candidates)?;
        writeln!(f, "  - Successfully updated: {}", self.updated)?;
        writeln!(f, "  - Missing files skipped: {}", self.missing)?;
        write!(f, "  - Errors encountered: {}", self.errors)
    }
}
