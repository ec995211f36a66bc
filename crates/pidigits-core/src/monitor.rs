//! Progress monitor: observe the shared counter until a request completes.
//!
//! The monitor wakes at most once per interval (or as soon as the counter
//! reaches its target), publishes a snapshot, and, when an operator channel
//! is attached, pauses until the operator acknowledges. Workers never check
//! the pause: it only holds back the monitor's own reporting.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::constants::DEFAULT_MONITOR_INTERVAL;
use crate::error::PiError;
use crate::observer::ProgressObserver;
use crate::progress::{ProgressCounter, ProgressUpdate};

/// Prompt shown to the operator on every pause.
pub const RESUME_PROMPT: &str = "Press ENTER to resume...";

/// A console-like channel to a human operator.
pub trait OperatorChannel {
    /// Show a message to the operator.
    fn prompt(&mut self, message: &str) -> io::Result<()>;

    /// Block until the operator enters one line. `None` means the channel is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Observes a [`ProgressCounter`] and reports snapshots at a fixed interval.
pub struct ProgressMonitor {
    interval: Duration,
    observer: Arc<dyn ProgressObserver>,
    operator: Option<Box<dyn OperatorChannel>>,
}

impl ProgressMonitor {
    /// Create a reporting-only monitor.
    #[must_use]
    pub fn new(interval: Duration, observer: Arc<dyn ProgressObserver>) -> Self {
        Self {
            interval,
            observer,
            operator: None,
        }
    }

    /// Attach an operator channel: every wake-up then waits for an acknowledgment.
    #[must_use]
    pub fn with_operator(mut self, operator: Box<dyn OperatorChannel>) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Interval between two wake-ups.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an operator channel is attached.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.operator.is_some()
    }

    /// Block until every requested digit has been counted.
    ///
    /// Also returns early, with a snapshot that is not `done`, when a worker
    /// aborted the counter; the join that follows reports the failure.
    pub fn watch(&mut self, counter: &ProgressCounter) -> Result<ProgressUpdate, PiError> {
        loop {
            let update = counter.wait_timeout(self.interval);
            self.observer.on_progress(&update);

            if update.done || counter.is_aborted() {
                return Ok(update);
            }

            self.pause()?;
            counter.notify_all();
        }
    }

    fn pause(&mut self) -> Result<(), PiError> {
        let Some(operator) = self.operator.as_deref_mut() else {
            return Ok(());
        };

        let mut outcome = Ok(None);
        self.observer.suspend(&mut || {
            outcome = operator
                .prompt(RESUME_PROMPT)
                .and_then(|()| operator.read_line());
        });

        match outcome {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                warn!("Operator channel closed, continuing without pauses");
                self.operator = None;
                Ok(())
            }
            Err(e) => Err(PiError::Interrupted(format!("operator channel: {e}"))),
        }
    }
}

impl Default for ProgressMonitor {
    fn default() -> Self {
        Self::new(
            DEFAULT_MONITOR_INTERVAL,
            Arc::new(crate::observers::LoggingObserver::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::observers::NoOpObserver;

    struct ScriptedOperator {
        replies: VecDeque<io::Result<Option<String>>>,
        prompts: Arc<AtomicUsize>,
    }

    impl ScriptedOperator {
        fn new(replies: Vec<io::Result<Option<String>>>, prompts: Arc<AtomicUsize>) -> Self {
            Self {
                replies: replies.into(),
                prompts,
            }
        }
    }

    impl OperatorChannel for ScriptedOperator {
        fn prompt(&mut self, message: &str) -> io::Result<()> {
            assert_eq!(message, RESUME_PROMPT);
            self.prompts.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            self.replies.pop_front().unwrap_or(Ok(Some(String::new())))
        }
    }

    struct CountingObserver(AtomicUsize);

    impl ProgressObserver for CountingObserver {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn slow_increments(counter: &ProgressCounter, n: u64) -> std::thread::JoinHandle<()> {
        let c = counter.clone();
        std::thread::spawn(move || {
            for _ in 0..n {
                std::thread::sleep(Duration::from_millis(15));
                c.increment();
            }
        })
    }

    #[test]
    fn completed_counter_returns_immediately() {
        let observer = Arc::new(CountingObserver(AtomicUsize::new(0)));
        let prompts = Arc::new(AtomicUsize::new(0));
        let mut monitor = ProgressMonitor::new(Duration::from_secs(60), observer.clone())
            .with_operator(Box::new(ScriptedOperator::new(vec![], prompts.clone())));

        let update = monitor.watch(&ProgressCounter::new(0)).unwrap();

        assert!(update.done);
        assert_eq!(observer.0.load(Ordering::Relaxed), 1);
        assert_eq!(prompts.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn reports_until_done() {
        let counter = ProgressCounter::new(4);
        let observer = Arc::new(CountingObserver(AtomicUsize::new(0)));
        let mut monitor = ProgressMonitor::new(Duration::from_millis(5), observer.clone());
        assert!(!monitor.is_interactive());

        let handle = slow_increments(&counter, 4);
        let update = monitor.watch(&counter).unwrap();
        handle.join().unwrap();

        assert!(update.done);
        assert_eq!(update.computed, 4);
        assert!(observer.0.load(Ordering::Relaxed) >= 2);
    }

    #[test]
    fn operator_is_prompted_on_each_wake() {
        let counter = ProgressCounter::new(3);
        let prompts = Arc::new(AtomicUsize::new(0));
        let mut monitor = ProgressMonitor::new(Duration::from_millis(5), Arc::new(NoOpObserver))
            .with_operator(Box::new(ScriptedOperator::new(vec![], prompts.clone())));

        let handle = slow_increments(&counter, 3);
        let update = monitor.watch(&counter).unwrap();
        handle.join().unwrap();

        assert!(update.done);
        assert!(prompts.load(Ordering::Relaxed) >= 1);
    }

    #[test]
    fn closed_operator_disables_pauses() {
        let counter = ProgressCounter::new(3);
        let prompts = Arc::new(AtomicUsize::new(0));
        let mut monitor = ProgressMonitor::new(Duration::from_millis(5), Arc::new(NoOpObserver))
            .with_operator(Box::new(ScriptedOperator::new(vec![Ok(None)], prompts.clone())));

        let handle = slow_increments(&counter, 3);
        let update = monitor.watch(&counter).unwrap();
        handle.join().unwrap();

        assert!(update.done);
        assert_eq!(prompts.load(Ordering::Relaxed), 1);
        assert!(!monitor.is_interactive());
    }

    #[test]
    fn operator_failure_interrupts_wait() {
        let counter = ProgressCounter::new(5);
        let prompts = Arc::new(AtomicUsize::new(0));
        let failure = io::Error::new(io::ErrorKind::Interrupted, "stdin gone");
        let mut monitor = ProgressMonitor::new(Duration::from_millis(1), Arc::new(NoOpObserver))
            .with_operator(Box::new(ScriptedOperator::new(vec![Err(failure)], prompts)));

        assert!(matches!(monitor.watch(&counter), Err(PiError::Interrupted(_))));
    }

    #[test]
    fn aborted_counter_ends_watch() {
        let counter = ProgressCounter::new(10);
        counter.abort();
        let mut monitor = ProgressMonitor::new(Duration::from_secs(60), Arc::new(NoOpObserver));
        let update = monitor.watch(&counter).unwrap();
        assert!(!update.done);
    }

    #[test]
    fn default_monitor_uses_five_second_interval() {
        let monitor = ProgressMonitor::default();
        assert_eq!(monitor.interval(), Duration::from_secs(5));
        assert!(!monitor.is_interactive());
    }
}
