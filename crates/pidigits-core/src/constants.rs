//! Constants for BBP digit extraction and progress monitoring.

use std::time::Duration;

/// Number of hex digits extracted from one BBP sum before resumming.
pub const DIGITS_PER_SUM: u64 = 8;

/// Terms of the negative-exponent tail below this value end the series.
pub const EPSILON: f64 = 1e-17;

/// Default interval between two progress monitor wake-ups.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(5);

/// Minimum progress change (1%) before a channel observer forwards an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, output file, ...).
    pub const ERROR_GENERIC: i32 = 1;
    /// Negative range bounds or zero workers.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Partition, buffer, or counter inconsistency, or a dead worker.
    pub const ERROR_INTERNAL: i32 = 3;
    /// The operator channel failed while the monitor was waiting.
    pub const ERROR_INTERRUPTED: i32 = 4;
}
