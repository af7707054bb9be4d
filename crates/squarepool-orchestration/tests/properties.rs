//! Property-based tests for the execution strategies.

use std::time::Duration;

use proptest::prelude::*;

use squarepool_core::observers::NoOpObserver;
use squarepool_core::DelayedSquare;
use squarepool_orchestration::{run_pooled, run_sequential};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Sequential results are the element-wise squares of the inputs.
    #[test]
    fn sequential_is_squares(inputs in prop::collection::vec(-1_000_000i64..1_000_000, 0..50)) {
        let task = DelayedSquare::new(Duration::ZERO);
        let report = run_sequential(&task, &inputs, &NoOpObserver::new()).unwrap();
        let expected: Vec<i64> = inputs.iter().map(|x| x * x).collect();
        prop_assert_eq!(report.results, expected);
    }

    /// Pooled results equal sequential results for every worker count.
    #[test]
    fn pooled_equals_sequential(
        inputs in prop::collection::vec(-1_000_000i64..1_000_000, 0..50),
        workers in 1usize..12,
    ) {
        let task = DelayedSquare::new(Duration::ZERO);
        let observer = NoOpObserver::new();
        let sequential = run_sequential(&task, &inputs, &observer).unwrap();
        let pooled = run_pooled(&task, &inputs, workers, &observer).unwrap();
        prop_assert_eq!(pooled.results, sequential.results);
    }
}
