//! Request options and defaults.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::constants::DEFAULT_MONITOR_INTERVAL;

/// Options for a digit request.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of workers (0 = one per available CPU).
    pub workers: usize,
    /// Interval between progress monitor wake-ups.
    pub monitor_interval: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers == 0 {
            self.workers = default_workers();
        }
        if self.monitor_interval.is_zero() {
            self.monitor_interval = DEFAULT_MONITOR_INTERVAL;
        }
        self
    }
}

/// One worker per available CPU, or one if that cannot be determined.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert!(opts.workers >= 1);
        assert_eq!(opts.monitor_interval, DEFAULT_MONITOR_INTERVAL);
    }

    #[test]
    fn normalize_zero_values() {
        let opts = Options {
            workers: 0,
            monitor_interval: Duration::ZERO,
        }
        .normalize();
        assert_eq!(opts.workers, default_workers());
        assert_eq!(opts.monitor_interval, DEFAULT_MONITOR_INTERVAL);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = Options {
            workers: 7,
            monitor_interval: Duration::from_millis(250),
        }
        .normalize();
        assert_eq!(opts.workers, 7);
        assert_eq!(opts.monitor_interval, Duration::from_millis(250));
    }
}
