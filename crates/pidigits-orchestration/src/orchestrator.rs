//! Core orchestration: run one request from partition to assembly.

use std::time::Instant;

use tracing::{info, warn};

use pidigits_core::aggregator::{aggregate, join_all};
use pidigits_core::error::PiError;
use pidigits_core::monitor::ProgressMonitor;
use pidigits_core::partition::spawn_workers;
use pidigits_core::progress::ProgressCounter;
use pidigits_core::range::{DigitRange, DigitRequest};
use pidigits_core::worker::WorkerHandle;

use crate::interfaces::DigitsResult;

/// How a request detects that its workers are done.
pub enum Completion {
    /// Join every worker unconditionally.
    Join,
    /// Watch the shared counter with a monitor, then join.
    Monitor(ProgressMonitor),
}

/// Compute `count` hex digits of π from `start`, split across `workers` threads.
///
/// # Example
/// ```
/// use pidigits_orchestration::compute_digits;
///
/// assert_eq!(compute_digits(0, 8, 4).unwrap(), vec![2, 4, 3, 15, 6, 10, 8, 8]);
/// assert!(compute_digits(0, 0, 3).unwrap().is_empty());
/// assert!(compute_digits(-1, 8, 2).is_err());
/// ```
pub fn compute_digits(start: i64, count: i64, workers: usize) -> Result<Vec<u8>, PiError> {
    let request = DigitRequest::try_new(start, count, workers)?;
    Ok(execute_request(&request, &mut Completion::Join)?.digits)
}

/// Execute a validated request with the given completion strategy.
///
/// A shared counter is created for the request, the range is partitioned
/// and every worker started, the optional monitor observes the counter,
/// and finally all workers are joined and their slices assembled.
pub fn execute_request(
    request: &DigitRequest,
    completion: &mut Completion,
) -> Result<DigitsResult, PiError> {
    let started = Instant::now();
    let range = request.range;
    let counter = ProgressCounter::new(range.count);

    let handles = spawn_workers(range, request.workers, &counter)?;
    let partition: Vec<DigitRange> = handles.iter().map(WorkerHandle::range).collect();

    if let Completion::Monitor(monitor) = completion {
        if let Err(err) = monitor.watch(&counter) {
            warn!(%range, error = %err, "Monitor failed, waiting for workers before returning");
            join_all(handles);
            return Err(err);
        }
    }

    let digits = aggregate(handles, range)?;

    let computed = counter.get();
    if computed != range.count {
        return Err(PiError::CounterMismatch {
            expected: range.count,
            actual: computed,
        });
    }

    let duration = started.elapsed();
    info!(%range, workers = request.workers, ?duration, "Request complete");

    Ok(DigitsResult {
        range,
        partition,
        digits,
        computed,
        duration,
    })
}
