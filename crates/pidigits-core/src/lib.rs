//! # pidigits-core
//!
//! Core library for the PiDigits-rs hexadecimal digit extractor.
//! Evaluates the Bailey–Borwein–Plouffe series, splits a digit range across
//! worker threads, tracks their progress, and reassembles their output.

pub mod aggregator;
pub mod bbp;
pub mod constants;
pub mod error;
pub mod monitor;
pub mod observer;
pub mod observers;
pub mod options;
pub mod partition;
pub mod progress;
pub mod range;
pub mod worker;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MONITOR_INTERVAL, DIGITS_PER_SUM, EPSILON};
pub use error::PiError;
pub use monitor::{OperatorChannel, ProgressMonitor};
pub use observer::{ProgressObserver, ProgressSubject};
pub use options::Options;
pub use progress::{ProgressCounter, ProgressUpdate};
pub use range::{DigitRange, DigitRequest};

/// Compute `count` hex digits of π starting at `start` on the calling thread.
///
/// This is a convenience function for simple use cases. For concurrent
/// execution and progress monitoring, use `pidigits-orchestration`.
///
/// # Example
/// ```
/// assert_eq!(pidigits_core::pi_hex_digits(0, 4), vec![2, 4, 3, 15]);
/// assert!(pidigits_core::pi_hex_digits(7, 0).is_empty());
/// ```
#[must_use]
pub fn pi_hex_digits(start: u64, count: usize) -> Vec<u8> {
    bbp::hex_digits(start, count)
}
