//! The delay-simulated square task.

use std::time::Duration;

use crate::observer::ProgressObserver;
use crate::progress::TaskEvent;
use crate::task::{SquareError, Task};

/// Squares its input after sleeping for a fixed delay.
///
/// The sleep stands in for real work; the delay is the same for every call.
#[derive(Debug, Clone)]
pub struct DelayedSquare {
    delay: Duration,
}

impl DelayedSquare {
    /// Create a task that sleeps for `delay` before squaring.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The per-call delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Square `n`, failing if the result does not fit in an `i64`.
pub fn checked_square(n: i64) -> Result<i64, SquareError> {
    n.checked_mul(n).ok_or(SquareError::Overflow(n))
}

impl Task for DelayedSquare {
    fn run(
        &self,
        index: usize,
        input: i64,
        observer: &dyn ProgressObserver,
    ) -> Result<i64, SquareError> {
        observer.on_event(&TaskEvent::Started { index, input });
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let output = checked_square(input)?;
        observer.on_event(&TaskEvent::Finished {
            index,
            input,
            output,
        });
        Ok(output)
    }

    fn name(&self) -> &str {
        "DelayedSquare"
    }
}
