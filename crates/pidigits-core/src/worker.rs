//! Workers: one thread per digit sub-range.
//!
//! A worker computes its own slice of digits, bumps the shared
//! [`ProgressCounter`] after every digit, and hands its buffer back
//! through its join handle. Workers never talk to each other.

use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::bbp::extract_digits;
use crate::error::PiError;
use crate::progress::ProgressCounter;
use crate::range::DigitRange;

/// Digits produced by one finished worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutput {
    /// The sub-range the worker was assigned.
    pub range: DigitRange,
    /// One nibble per position of `range`.
    pub digits: Vec<u8>,
}

/// A unit of work: a sub-range plus a handle to the request's counter.
pub struct Worker {
    range: DigitRange,
    counter: ProgressCounter,
}

impl Worker {
    /// Create a worker for an already validated range.
    #[must_use]
    pub fn new(range: DigitRange, counter: ProgressCounter) -> Self {
        Self { range, counter }
    }

    /// Create a worker from signed bounds, rejecting negative values before any work.
    pub fn try_new(start: i64, count: i64, counter: ProgressCounter) -> Result<Self, PiError> {
        Ok(Self::new(DigitRange::try_new(start, count)?, counter))
    }

    /// The range this worker owns.
    #[must_use]
    pub fn range(&self) -> DigitRange {
        self.range
    }

    /// Compute the range on the current thread.
    pub fn run(self) -> Result<WorkerOutput, PiError> {
        let len = self.range.len()?;
        let _guard = AbortOnPanic(&self.counter);

        debug!(start = self.range.start, count = self.range.count, "Worker started");
        let digits = extract_digits(self.range.start, len, || {
            self.counter.increment();
        });
        debug!(start = self.range.start, count = self.range.count, "Worker finished");

        Ok(WorkerOutput {
            range: self.range,
            digits,
        })
    }

    /// Start the worker on its own thread.
    pub fn spawn(self) -> Result<WorkerHandle, PiError> {
        let range = self.range;
        let handle = thread::Builder::new()
            .name(format!("pi-worker-{}", range.start))
            .spawn(move || self.run())
            .map_err(|source| PiError::Spawn {
                start: range.start,
                source,
            })?;
        Ok(WorkerHandle { range, handle })
    }
}

/// Marks the counter aborted if the worker unwinds, so monitors stop waiting.
struct AbortOnPanic<'a>(&'a ProgressCounter);

impl Drop for AbortOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.abort();
        }
    }
}

/// A running worker. Its digits are only reachable through [`join`](Self::join).
pub struct WorkerHandle {
    range: DigitRange,
    handle: JoinHandle<Result<WorkerOutput, PiError>>,
}

impl WorkerHandle {
    /// The range the worker owns.
    #[must_use]
    pub fn range(&self) -> DigitRange {
        self.range
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker finishes and take its output.
    pub fn join(self) -> Result<WorkerOutput, PiError> {
        let range = self.range;
        self.handle.join().map_err(|_| PiError::WorkerPanicked {
            start: range.start,
            count: range.count,
        })?
    }
}
