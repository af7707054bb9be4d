//! Concrete observer implementations.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::observer::ProgressObserver;
use crate::progress::TaskEvent;

/// Null object: discards every task event.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all events.
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
    fn on_event(&self, _event: &TaskEvent) {}
}

/// Observer that forwards events to `tracing` at debug level.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
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
    fn on_event(&self, event: &TaskEvent) {
        match *event {
            TaskEvent::Started { index, input } => {
                debug!(index, input, "Task started");
            }
            TaskEvent::Finished {
                index,
                input,
                output,
            } => {
                debug!(index, input, output, "Task finished");
            }
        }
    }
}

/// Observer that records every event and tracks how many tasks overlap.
///
/// A task counts as active between its `Started` and `Finished` events.
pub struct RecordingObserver {
    events: Mutex<Vec<TaskEvent>>,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl RecordingObserver {
    /// Create an empty recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Snapshot of all events received so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<TaskEvent> {
        self.events.lock().clone()
    }

    /// Number of `Started` events seen for the input at `index`.
    #[must_use]
    pub fn starts_for(&self, index: usize) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| !e.is_finished() && e.index() == index)
            .count()
    }

    /// Largest number of tasks observed running at the same time.
    #[must_use]
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_event(&self, event: &TaskEvent) {
        if event.is_finished() {
            self.active.fetch_sub(1, Ordering::SeqCst);
        } else {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
        }
        self.events.lock().push(*event);
    }
}
