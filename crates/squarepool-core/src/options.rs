//! Run options shared by both execution strategies.

use std::time::Duration;

use crate::constants::{DEFAULT_DELAY_MS, DEFAULT_WORKER_COUNT};
use crate::task::SquareError;

/// Options for a comparator run.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Artificial delay applied by every task invocation.
    pub delay: Duration,
    /// Number of workers in the pooled strategy.
    pub worker_count: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }
}

impl RunOptions {
    /// Create options with the given delay and worker count.
    #[must_use]
    pub fn new(delay: Duration, worker_count: usize) -> Self {
        Self {
            delay,
            worker_count,
        }
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<(), SquareError> {
        if self.worker_count == 0 {
            return Err(SquareError::Config(
                "worker count must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}
