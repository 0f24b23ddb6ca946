//! Run accounting.
//!
//! The tally is an explicit value threaded through the run rather than
//! global state, so nested or repeated runs cannot contaminate each other.

/// Pass/fail tally for a conformance run.
///
/// `failures` never exceeds `total`; both only grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Variants attempted so far.
    pub total: usize,
    /// Variants that failed.
    pub failures: usize,
}

impl RunTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a passing variant.
    pub fn record_pass(&mut self) {
        self.total += 1;
    }

    /// Record a failing variant.
    pub fn record_failure(&mut self) {
        self.total += 1;
        self.failures += 1;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: RunTally) {
        self.total += other.total;
        self.failures += other.failures;
    }

    /// Whether every attempted variant passed.
    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        format!("total: {}, failures: {}", self.total, self.failures)
    }
}
