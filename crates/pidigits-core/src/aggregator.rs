//! Result assembly: join every worker and stitch the slices back in order.

use tracing::debug;

use crate::error::PiError;
use crate::partition::verify_tiling;
use crate::range::DigitRange;
use crate::worker::{WorkerHandle, WorkerOutput};

/// Join every worker, then assemble their digits for `range`.
///
/// All handles are joined before any failure is reported, so no worker is
/// left running behind an early return.
pub fn aggregate(handles: Vec<WorkerHandle>, range: DigitRange) -> Result<Vec<u8>, PiError> {
    let joined = join_all(handles);

    let mut outputs = Vec::with_capacity(joined.len());
    for result in joined {
        outputs.push(result?);
    }

    assemble(outputs, range)
}

/// Block until every worker has exited, keeping each outcome.
///
/// Also used on failure paths: workers cannot be cancelled, so a request
/// that gives up early still waits them out before returning.
pub fn join_all(handles: Vec<WorkerHandle>) -> Vec<Result<WorkerOutput, PiError>> {
    handles.into_iter().map(WorkerHandle::join).collect()
}

/// Order finished outputs by start offset and concatenate them.
///
/// Fails if a buffer's length differs from its range count, or if the
/// ranges do not tile `range` exactly.
pub fn assemble(mut outputs: Vec<WorkerOutput>, range: DigitRange) -> Result<Vec<u8>, PiError> {
    outputs.sort_by_key(|output| output.range);

    for output in &outputs {
        let actual = output.digits.len() as u64;
        if actual != output.range.count {
            return Err(PiError::BufferMismatch {
                start: output.range.start,
                expected: output.range.count,
                actual,
            });
        }
    }

    let ranges: Vec<DigitRange> = outputs.iter().map(|output| output.range).collect();
    verify_tiling(range, &ranges)?;

    let mut digits = Vec::with_capacity(range.len()?);
    for output in outputs {
        digits.extend_from_slice(&output.digits);
    }

    if digits.len() as u64 != range.count {
        return Err(PiError::PartitionInconsistency(format!(
            "assembled {} digits for {range}",
            digits.len()
        )));
    }

    debug!(%range, "Assembled worker results");
    Ok(digits)
}
