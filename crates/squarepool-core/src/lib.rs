//! # squarepool-core
//!
//! Core library for the squarepool execution comparator: the `Task` trait,
//! the delay-simulated square task, progress observers, and a fixed-size
//! worker pool that returns results in submission order.

pub mod constants;
pub mod observer;
pub mod observers;
pub mod options;
pub mod pool;
pub mod progress;
pub mod square;
pub mod task;

// Re-exports
pub use constants::{exit_codes, DEFAULT_DELAY_MS, DEFAULT_INPUTS, DEFAULT_WORKER_COUNT};
pub use observer::ProgressObserver;
pub use options::RunOptions;
pub use pool::WorkerPool;
pub use progress::TaskEvent;
pub use square::DelayedSquare;
pub use task::{SquareError, Task};
