//! Orchestration interfaces.

use std::time::Duration;

use pidigits_core::range::DigitRange;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a finished request.
    fn present_result(&self, result: &DigitsResult, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of one digit request.
#[derive(Debug, Clone)]
pub struct DigitsResult {
    /// The requested interval.
    pub range: DigitRange,
    /// Sub-ranges in start order, one per worker.
    pub partition: Vec<DigitRange>,
    /// One nibble per requested position.
    pub digits: Vec<u8>,
    /// Final value of the shared progress counter.
    pub computed: u64,
    /// Wall-clock time from spawn to assembly.
    pub duration: Duration,
}

impl DigitsResult {
    /// Number of workers that shared the request.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.partition.len()
    }
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_result(&self, _result: &DigitsResult, _details: bool) {}
    fn present_error(&self, _error: &str) {}
}
