//! Digit ranges and top-level requests.

use std::fmt;

use crate::error::PiError;

/// Largest digit position a request may reach.
///
/// Keeps `8k + 6` denominators well inside `u64`.
pub const MAX_POSITION: u64 = 1 << 60;

/// Largest digit count a single request may ask for.
///
/// One byte per digit must fit in memory; larger counts are rejected as
/// invalid input instead of failing inside a worker.
pub const MAX_REQUEST_COUNT: u64 = 1 << 32;

/// A contiguous interval `[start, start + count)` of hex digit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitRange {
    /// First digit position (0 = first hex digit after the point).
    pub start: u64,
    /// Number of digits.
    pub count: u64,
}

impl DigitRange {
    /// Create a range from already validated bounds.
    #[must_use]
    pub const fn new(start: u64, count: u64) -> Self {
        Self { start, count }
    }

    /// Validate signed bounds as supplied by callers and build a range.
    ///
    /// # Example
    /// ```
    /// use pidigits_core::range::DigitRange;
    ///
    /// assert_eq!(DigitRange::try_new(4, 8).unwrap(), DigitRange::new(4, 8));
    /// assert!(DigitRange::try_new(-1, 8).is_err());
    /// assert!(DigitRange::try_new(0, -8).is_err());
    /// ```
    pub fn try_new(start: i64, count: i64) -> Result<Self, PiError> {
        let start_u = u64::try_from(start).map_err(|_| PiError::invalid("start", start))?;
        let count_u = u64::try_from(count).map_err(|_| PiError::invalid("count", count))?;
        match start_u.checked_add(count_u) {
            Some(end) if end <= MAX_POSITION => Ok(Self::new(start_u, count_u)),
            _ => Err(PiError::invalid(
                "count",
                format!("{count} (range end exceeds {MAX_POSITION})"),
            )),
        }
    }

    /// One past the last position.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.start + self.count
    }

    /// Whether the range holds no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Digit count as a buffer length.
    pub fn len(&self) -> Result<usize, PiError> {
        usize::try_from(self.count).map_err(|_| PiError::invalid("count", self.count))
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A validated top-level request: a digit range and how many workers share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRequest {
    /// The requested interval.
    pub range: DigitRange,
    /// Number of concurrent workers (at least 1).
    pub workers: usize,
}

impl DigitRequest {
    /// Validate caller input.
    pub fn try_new(start: i64, count: i64, workers: usize) -> Result<Self, PiError> {
        let range = DigitRange::try_new(start, count)?;
        if workers == 0 {
            return Err(PiError::invalid("workers", workers));
        }
        if range.count > MAX_REQUEST_COUNT {
            return Err(PiError::invalid(
                "count",
                format!("{} (more than {MAX_REQUEST_COUNT} digits)", range.count),
            ));
        }
        // Fails early on targets where the count cannot be addressed
        range.len()?;
        Ok(Self { range, workers })
    }
}
