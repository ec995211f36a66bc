//! Observer pattern for progress reporting.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress snapshots from the monitor.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);

    /// Run `f` while any live rendering owned by the observer is hidden.
    ///
    /// The monitor prompts the operator through this hook so prompts do not
    /// interleave with progress output.
    fn suspend(&self, f: &mut dyn FnMut()) {
        f();
    }
}

/// Subject that fans updates out to a collection of observers.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers.write().push(observer);
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_progress(&self, update: &ProgressUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_progress(update);
        }
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        // Nest the suspensions so every observer is hidden while f runs
        fn nest(observers: &[Arc<dyn ProgressObserver>], f: &mut dyn FnMut()) {
            match observers.split_first() {
                Some((first, rest)) => first.suspend(&mut || nest(rest, &mut *f)),
                None => f(),
            }
        }
        let observers = self.observers.read();
        nest(&observers, f);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::observers::NoOpObserver;

    struct CountingObserver {
        count: AtomicUsize,
        suspended: AtomicUsize,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                count: AtomicUsize::new(0),
                suspended: AtomicUsize::new(0),
            }
        }
    }

    impl ProgressObserver for CountingObserver {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }

        fn suspend(&self, f: &mut dyn FnMut()) {
            self.suspended.fetch_add(1, Ordering::Relaxed);
            f();
        }
    }

    #[test]
    fn subject_with_default_suspend_observers() {
        let subject = ProgressSubject::new();
        let counting = Arc::new(CountingObserver::new());
        subject.register(Arc::new(NoOpObserver::new()));
        subject.register(counting.clone());
        subject.on_progress(&ProgressUpdate::new(2, 2));
        let mut runs = 0;
        subject.suspend(&mut || runs += 1);
        assert_eq!(runs, 1);
        assert_eq!(counting.count.load(Ordering::Relaxed), 1);
        assert_eq!(counting.suspended.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn subject_notify_calls_all_observers() {
        let subject = ProgressSubject::new();
        let obs1 = Arc::new(CountingObserver::new());
        let obs2 = Arc::new(CountingObserver::new());
        subject.register(obs1.clone());
        subject.register(obs2.clone());

        let update = ProgressUpdate::new(1, 2);
        subject.on_progress(&update);
        subject.on_progress(&update);

        assert_eq!(obs1.count.load(Ordering::Relaxed), 2);
        assert_eq!(obs2.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn subject_suspend_runs_closure_once_inside_every_observer() {
        let subject = ProgressSubject::new();
        let obs1 = Arc::new(CountingObserver::new());
        let obs2 = Arc::new(CountingObserver::new());
        subject.register(obs1.clone());
        subject.register(obs2.clone());

        let mut runs = 0;
        subject.suspend(&mut || runs += 1);

        assert_eq!(runs, 1);
        assert_eq!(obs1.suspended.load(Ordering::Relaxed), 1);
        assert_eq!(obs2.suspended.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn empty_subject_still_runs_suspended_closure() {
        let subject = ProgressSubject::default();
        let mut ran = false;
        subject.suspend(&mut || ran = true);
        assert!(ran);
    }
}
