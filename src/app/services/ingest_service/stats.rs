//! Batch statistics

use crate::app::models::report::{ProcessResult, Severity};

/// Summary of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of items processed
    pub processed: usize,

    /// Items that produced a record and were persisted (or dry-run)
    pub succeeded: usize,

    /// Items with a hard failure or a persistence failure
    pub failed: usize,

    /// Items run in dry-run mode
    pub dry_run: usize,

    pub infos: usize,
    pub warnings: usize,
    pub errors: usize,

    /// Items whose update changed at least one field
    pub changed: usize,
}

impl BatchStats {
    /// Summarize a slice of results
    pub fn from_results(results: &[ProcessResult]) -> Self {
        let mut stats = Self::default();
        for result in results {
            stats.record(result);
        }
        stats
    }

    /// Add one result to the statistics
    pub fn record(&mut self, result: &ProcessResult) {
        self.processed += 1;
        if result.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        if result.dry_run {
            self.dry_run += 1;
        }
        self.infos += result.count_by_severity(Severity::Info);
        self.warnings += result.count_by_severity(Severity::Warning);
        self.errors += result.count_by_severity(Severity::Error);
        if result.diff.as_ref().is_some_and(|diff| !diff.is_empty()) {
            self.changed += 1;
        }
    }

    /// Success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.processed == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.processed as f64) * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} processed, {} succeeded, {} failed ({:.1}% success), {} changed; {} errors, {} warnings, {} infos",
            self.processed,
            self.succeeded,
            self.failed,
            self.success_rate(),
            self.changed,
            self.errors,
            self.warnings,
            self.infos
        )
    }
}
