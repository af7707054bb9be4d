//! Task trait and the error type shared by every crate in the workspace.
//!
//! `Task` is the unit of work the comparator times. Implementations must be
//! pure apart from their artificial delay and the events they emit, so the
//! same input always produces the same output whichever thread runs it.

use crate::observer::ProgressObserver;

/// Error type for task execution and run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Invalid configuration (zero workers, unknown strategy, bad delay).
    #[error("configuration error: {0}")]
    Config(String),

    /// The square of the input does not fit in an `i64`.
    #[error("overflow squaring {0}")]
    Overflow(i64),

    /// The worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// Sequential and pooled runs produced different results.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// A unit of work applied once per input.
pub trait Task: Send + Sync {
    /// Run the task for the input at position `index`.
    fn run(
        &self,
        index: usize,
        input: i64,
        observer: &dyn ProgressObserver,
    ) -> Result<i64, SquareError>;

    /// Get the name of this task.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            SquareError::Config("worker count must be positive".into()).to_string(),
            "configuration error: worker count must be positive"
        );
        assert_eq!(SquareError::Overflow(-7).to_string(), "overflow squaring -7");
        assert_eq!(
            SquareError::Mismatch.to_string(),
            "result mismatch between strategies"
        );
    }
}
