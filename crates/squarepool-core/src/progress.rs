//! Progress events emitted by tasks.

/// Event sent from a task to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// The task for `inputs[index]` has begun.
    Started {
        /// Position of the input in the submitted sequence.
        index: usize,
        /// The input value.
        input: i64,
    },
    /// The task for `inputs[index]` has produced its output.
    Finished {
        /// Position of the input in the submitted sequence.
        index: usize,
        /// The input value.
        input: i64,
        /// The computed output.
        output: i64,
    },
}

impl TaskEvent {
    /// Position of the input this event refers to.
    #[must_use]
    pub fn index(&self) -> usize {
        match *self {
            Self::Started { index, .. } | Self::Finished { index, .. } => index,
        }
    }

    /// Input value this event refers to.
    #[must_use]
    pub fn input(&self) -> i64 {
        match *self {
            Self::Started { input, .. } | Self::Finished { input, .. } => input,
        }
    }

    /// Whether this is a completion event.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}
