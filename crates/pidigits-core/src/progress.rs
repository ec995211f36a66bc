//! Shared progress counter and the snapshots derived from it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Progress snapshot sent from the monitor to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Digits computed so far across all workers.
    pub computed: u64,
    /// Digits requested.
    pub total: u64,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Whether every requested digit has been counted.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a snapshot for `computed` out of `total` digits.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(computed: u64, total: u64) -> Self {
        let progress = if total == 0 {
            1.0
        } else {
            (computed as f64 / total as f64).min(1.0)
        };
        Self {
            computed,
            total,
            progress,
            done: computed >= total,
        }
    }
}

#[derive(Debug, Default)]
struct CounterState {
    computed: u64,
    aborted: bool,
}

struct Shared {
    state: Mutex<CounterState>,
    changed: Condvar,
    target: u64,
}

/// Tally of digits computed by every worker of one request.
///
/// Cloning yields another handle to the same counter. The count only grows
/// and is never reset; waiters are woken when it reaches the target or when
/// a worker aborts.
///
/// # Example
/// ```
/// use pidigits_core::progress::ProgressCounter;
///
/// let counter = ProgressCounter::new(2);
/// let handle = counter.clone();
/// handle.increment();
/// assert!(!counter.is_complete());
/// handle.increment();
/// assert!(counter.is_complete());
/// assert_eq!(counter.get(), 2);
/// ```
#[derive(Clone)]
pub struct ProgressCounter {
    shared: Arc<Shared>,
}

impl ProgressCounter {
    /// Create a counter that completes after `target` increments.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CounterState::default()),
                changed: Condvar::new(),
                target,
            }),
        }
    }

    /// Number of digits the request expects.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.shared.target
    }

    /// Count one computed digit. Returns the new total.
    pub fn increment(&self) -> u64 {
        let mut state = self.shared.state.lock();
        state.computed += 1;
        if state.computed == self.shared.target {
            self.shared.changed.notify_all();
        }
        state.computed
    }

    /// Current number of computed digits.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.shared.state.lock().computed
    }

    /// Whether every requested digit has been counted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.get() >= self.shared.target
    }

    /// Mark the request as unable to complete and wake every waiter.
    pub fn abort(&self) {
        self.shared.state.lock().aborted = true;
        self.shared.changed.notify_all();
    }

    /// Whether a worker died before finishing its range.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.shared.state.lock().aborted
    }

    /// Wake every thread blocked in [`wait_timeout`](Self::wait_timeout).
    pub fn notify_all(&self) {
        self.shared.changed.notify_all();
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ProgressUpdate {
        ProgressUpdate::new(self.get(), self.shared.target)
    }

    /// Block until the target is reached, the counter is aborted, or
    /// `interval` elapses, whichever comes first. Spurious wake-ups do not
    /// shorten the wait.
    pub fn wait_timeout(&self, interval: Duration) -> ProgressUpdate {
        let deadline = Instant::now() + interval;
        let mut state = self.shared.state.lock();
        while state.computed < self.shared.target && !state.aborted {
            if self
                .shared
                .changed
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                break;
            }
        }
        ProgressUpdate::new(state.computed, self.shared.target)
    }
}

impl std::fmt::Debug for ProgressCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("ProgressCounter")
            .field("computed", &state.computed)
            .field("target", &self.shared.target)
            .field("aborted", &state.aborted)
            .finish()
    }
}
