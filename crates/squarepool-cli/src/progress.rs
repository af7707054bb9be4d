//! Per-task progress lines on stdout.

use squarepool_core::observer::ProgressObserver;
use squarepool_core::progress::TaskEvent;

use crate::output::{format_task_finished, format_task_started};

/// Observer that prints a line when each task starts and finishes.
///
/// Under the pooled strategy lines from different workers interleave in
/// completion order; each line is written whole.
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// Create a new console observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress line for a task event.
#[must_use]
pub fn render_event(event: &TaskEvent) -> String {
    match *event {
        TaskEvent::Started { input, .. } => format_task_started(input),
        TaskEvent::Finished { input, output, .. } => format_task_finished(input, output),
    }
}

impl ProgressObserver for ConsoleObserver {
    fn on_event(&self, event: &TaskEvent) {
        println!("{}", render_event(event));
    }
}
