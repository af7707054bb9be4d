//! Property-based tests for the square task and the worker pool.
//!
//! These run with zero delay so each case stays fast.

use std::time::Duration;

use proptest::prelude::*;

use squarepool_core::constants::MAX_SQUARABLE;
use squarepool_core::observers::{NoOpObserver, RecordingObserver};
use squarepool_core::{DelayedSquare, SquareError, Task, WorkerPool};

fn square_all(inputs: &[i64]) -> Vec<i64> {
    let task = DelayedSquare::new(Duration::ZERO);
    let observer = NoOpObserver::new();
    inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| task.run(i, x, &observer).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The task squares every representable input.
    #[test]
    fn task_squares(n in -MAX_SQUARABLE..=MAX_SQUARABLE) {
        let task = DelayedSquare::new(Duration::ZERO);
        prop_assert_eq!(task.run(0, n, &NoOpObserver::new()), Ok(n * n));
    }

    /// Pool results match a plain in-order map for any worker count.
    #[test]
    fn pool_matches_in_order_map(
        inputs in prop::collection::vec(-10_000i64..10_000, 0..40),
        workers in 1usize..9,
    ) {
        let pool = WorkerPool::new(workers).unwrap();
        let task = DelayedSquare::new(Duration::ZERO);
        let observer = NoOpObserver::new();
        let pooled: Result<Vec<i64>, SquareError> =
            pool.map_ordered(&inputs, |i, &x| task.run(i, x, &observer));
        prop_assert_eq!(pooled.unwrap(), square_all(&inputs));
    }

    /// Every input is started exactly once by the pool.
    #[test]
    fn pool_runs_each_input_once(
        inputs in prop::collection::vec(any::<i32>(), 0..30),
        workers in 1usize..6,
    ) {
        let inputs: Vec<i64> = inputs.into_iter().map(i64::from).collect();
        let pool = WorkerPool::new(workers).unwrap();
        let task = DelayedSquare::new(Duration::ZERO);
        let observer = RecordingObserver::new();
        let _: Vec<i64> = pool
            .map_ordered(&inputs, |i, &x| task.run(i, x, &observer))
            .unwrap();
        for i in 0..inputs.len() {
            prop_assert_eq!(observer.starts_for(i), 1);
        }
        prop_assert_eq!(observer.events().len(), inputs.len() * 2);
    }
}
