//! Range partitioning: split a request across N workers.

use tracing::{debug, warn};

use crate::aggregator::join_all;
use crate::error::PiError;
use crate::progress::ProgressCounter;
use crate::range::DigitRange;
use crate::worker::{Worker, WorkerHandle};

/// Split `range` into `workers` contiguous sub-ranges.
///
/// Every sub-range gets `count / workers` digits and the first
/// `count % workers` get one more, so sizes differ by at most one.
/// When `count < workers` the trailing sub-ranges are empty.
///
/// # Example
/// ```
/// use pidigits_core::partition::partition;
/// use pidigits_core::range::DigitRange;
///
/// let parts = partition(DigitRange::new(10, 7), 3).unwrap();
/// assert_eq!(
///     parts,
///     vec![DigitRange::new(10, 3), DigitRange::new(13, 2), DigitRange::new(15, 2)]
/// );
/// ```
pub fn partition(range: DigitRange, workers: usize) -> Result<Vec<DigitRange>, PiError> {
    if workers == 0 {
        return Err(PiError::invalid("workers", workers));
    }

    let n = workers as u64;
    let count_per_worker = range.count / n;
    let residual = range.count % n;

    let mut next_start = range.start;
    let parts: Vec<DigitRange> = (0..n)
        .map(|i| {
            let count = count_per_worker + u64::from(i < residual);
            let part = DigitRange::new(next_start, count);
            next_start += count;
            part
        })
        .collect();

    verify_tiling(range, &parts)?;
    Ok(parts)
}

/// Check that `parts`, in order, cover `range` exactly with no gap or overlap.
pub fn verify_tiling(range: DigitRange, parts: &[DigitRange]) -> Result<(), PiError> {
    let mut expected = range.start;
    for part in parts {
        if part.start != expected {
            return Err(PiError::PartitionInconsistency(format!(
                "sub-range {part} starts at {}, expected {expected}",
                part.start
            )));
        }
        expected = part.end();
    }
    if expected != range.end() {
        return Err(PiError::PartitionInconsistency(format!(
            "sub-ranges end at {expected}, request {range} ends at {}",
            range.end()
        )));
    }
    Ok(())
}

/// Partition `range` and start one worker per sub-range.
///
/// All workers are running when this returns.
pub fn spawn_workers(
    range: DigitRange,
    workers: usize,
    counter: &ProgressCounter,
) -> Result<Vec<WorkerHandle>, PiError> {
    let parts = partition(range, workers)?;
    debug!(%range, workers, "Spawning workers");
    let mut handles = Vec::with_capacity(parts.len());
    for part in parts {
        match Worker::new(part, counter.clone()).spawn() {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                warn!(%part, error = %err, "Worker spawn failed, joining started workers");
                join_all(handles);
                return Err(err);
            }
        }
    }
    Ok(handles)
}
