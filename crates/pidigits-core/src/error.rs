//! Error type shared by every stage of a digit request.

/// Error type for hex digit computations.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// A range bound or worker count was out of its domain.
    #[error("invalid argument: {name} = {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value, rendered for diagnostics.
        value: String,
    },

    /// Sub-ranges do not exactly tile the requested interval.
    #[error("partition inconsistency: {0}")]
    PartitionInconsistency(String),

    /// A worker produced a buffer whose length differs from its range count.
    #[error("worker at offset {start} produced {actual} digits, expected {expected}")]
    BufferMismatch {
        /// Start offset of the worker's range.
        start: u64,
        /// Count of the worker's range.
        expected: u64,
        /// Length of the buffer it returned.
        actual: u64,
    },

    /// The shared progress counter disagrees with the requested count.
    #[error("progress counter reached {actual}, expected {expected}")]
    CounterMismatch {
        /// Requested digit count.
        expected: u64,
        /// Final counter value.
        actual: u64,
    },

    /// A worker terminated abnormally before delivering its digits.
    #[error("worker for range [{start}, {start}+{count}) panicked")]
    WorkerPanicked {
        /// Start offset of the worker's range.
        start: u64,
        /// Count of the worker's range.
        count: u64,
    },

    /// The operator channel failed while the progress monitor was waiting.
    #[error("wait interrupted: {0}")]
    Interrupted(String),

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker at offset {start}: {source}")]
    Spawn {
        /// Start offset of the worker's range.
        start: u64,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PiError {
    /// Build an `InvalidArgument` error for a named value.
    pub fn invalid(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
        }
    }

    /// Whether this error signals a defect inside the pipeline rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::PartitionInconsistency(_)
                | Self::BufferMismatch { .. }
                | Self::CounterMismatch { .. }
                | Self::WorkerPanicked { .. }
        )
    }
}
