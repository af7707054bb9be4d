//! Observer trait for task progress.

use crate::progress::TaskEvent;

/// Observer receiving task events.
///
/// Called from worker threads under the pooled strategy, so implementations
/// must tolerate concurrent calls.
pub trait ProgressObserver: Send + Sync {
    /// Receive a task event.
    fn on_event(&self, event: &TaskEvent);
}
