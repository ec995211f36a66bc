//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that sends snapshots through a channel (non-blocking).
///
/// Lets a separate task subscribe to periodic counter snapshots.
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
    last_reported: AtomicU64,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self {
            sender,
            last_reported: AtomicU64::new(0f64.to_bits()),
        }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            // A full or disconnected channel drops the snapshot
            let _ = self.sender.try_send(*update);
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
        }
    }
}

/// Observer that logs snapshots through `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(digits = update.total, "All digits computed");
        } else {
            debug!(
                computed = update.computed,
                total = update.total,
                progress = format!("{:.1}%", update.progress * 100.0),
                "Digits found"
            );
        }
    }
}

/// Observer that ignores progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_observer_does_nothing() {
        let observer = NoOpObserver::new();
        observer.on_progress(&ProgressUpdate::new(1, 2));
    }

    #[test]
    fn channel_observer_sends() {
        let (tx, rx) = crossbeam_channel::bounded(10);
        let observer = ChannelObserver::new(tx);

        observer.on_progress(&ProgressUpdate::new(50, 100));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.computed, 50);
        assert_eq!(received.total, 100);
    }

    #[test]
    fn channel_observer_throttles() {
        let (tx, rx) = crossbeam_channel::bounded(10);
        let observer = ChannelObserver::new(tx);

        observer.on_progress(&ProgressUpdate::new(3, 200));
        assert!(rx.try_recv().is_ok());

        // 1.5% -> 2.0% is below the 1% threshold
        observer.on_progress(&ProgressUpdate::new(4, 200));
        assert!(rx.try_recv().is_err());

        observer.on_progress(&ProgressUpdate::new(6, 200));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn channel_observer_always_sends_done() {
        let (tx, rx) = crossbeam_channel::bounded(10);
        let observer = ChannelObserver::new(tx);

        observer.on_progress(&ProgressUpdate::new(999, 1000));
        let _ = rx.try_recv();

        observer.on_progress(&ProgressUpdate::new(1000, 1000));
        assert!(rx.try_recv().unwrap().done);
    }

    #[test]
    fn channel_observer_full_channel_does_not_panic() {
        let (tx, _rx) = crossbeam_channel::bounded(1);
        let observer = ChannelObserver::new(tx);
        observer.on_progress(&ProgressUpdate::new(2, 100));
        observer.on_progress(&ProgressUpdate::new(5, 100));
    }

    #[test]
    fn logging_observer_accepts_progress_and_done() {
        let observer = LoggingObserver::new();
        observer.on_progress(&ProgressUpdate::new(5, 100));
        observer.on_progress(&ProgressUpdate::new(100, 100));
    }
}
