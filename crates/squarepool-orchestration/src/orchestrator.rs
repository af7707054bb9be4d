//! Core orchestration: sequential and pooled execution, and result analysis.

use std::time::Instant;

use tracing::info;

use squarepool_core::observer::ProgressObserver;
use squarepool_core::observers::NoOpObserver;
use squarepool_core::{DelayedSquare, RunOptions, SquareError, Task, WorkerPool};

use crate::interfaces::{Comparison, RunReport, Strategy};

/// Apply `task` to each input in order, one at a time.
pub fn run_sequential(
    task: &dyn Task,
    inputs: &[i64],
    observer: &dyn ProgressObserver,
) -> Result<RunReport, SquareError> {
    let start = Instant::now();
    let results = inputs
        .iter()
        .enumerate()
        .map(|(i, &input)| task.run(i, input, observer))
        .collect::<Result<Vec<_>, _>>()?;
    let elapsed = start.elapsed();

    info!(
        task = task.name(),
        count = inputs.len(),
        elapsed = ?elapsed,
        "Sequential run complete"
    );
    Ok(RunReport {
        strategy: Strategy::Sequential,
        worker_count: 1,
        results,
        elapsed,
    })
}

/// Submit every input to a pool of `worker_count` workers and collect the
/// results in submission order.
///
/// Pool construction is included in the measured time. The pool never starts
/// more threads than there are inputs; the report still carries the
/// requested `worker_count`.
pub fn run_pooled(
    task: &dyn Task,
    inputs: &[i64],
    worker_count: usize,
    observer: &dyn ProgressObserver,
) -> Result<RunReport, SquareError> {
    if worker_count == 0 {
        return Err(SquareError::Config(
            "worker count must be a positive integer".into(),
        ));
    }
    let start = Instant::now();
    let pool = WorkerPool::new(worker_count.min(inputs.len()).max(1))?;
    let results = pool.map_ordered(inputs, |i, &input| task.run(i, input, observer))?;
    let elapsed = start.elapsed();

    info!(
        task = task.name(),
        count = inputs.len(),
        worker_count,
        elapsed = ?elapsed,
        "Pooled run complete"
    );
    Ok(RunReport {
        strategy: Strategy::Pooled,
        worker_count,
        results,
        elapsed,
    })
}

/// Run a single strategy with the delay-simulated square task.
pub fn run_strategy(
    strategy: Strategy,
    inputs: &[i64],
    opts: &RunOptions,
    observer: &dyn ProgressObserver,
) -> Result<RunReport, SquareError> {
    opts.validate()?;
    let task = DelayedSquare::new(opts.delay);
    match strategy {
        Strategy::Sequential => run_sequential(&task, inputs, observer),
        Strategy::Pooled => run_pooled(&task, inputs, opts.worker_count, observer),
    }
}

/// Run each strategy in order and collect one report per strategy.
pub fn execute_strategies(
    strategies: &[Strategy],
    inputs: &[i64],
    opts: &RunOptions,
) -> Result<Vec<RunReport>, SquareError> {
    execute_strategies_with_observer(strategies, inputs, opts, &NoOpObserver::new())
}

/// Run each strategy in order with a progress observer.
pub fn execute_strategies_with_observer(
    strategies: &[Strategy],
    inputs: &[i64],
    opts: &RunOptions,
    observer: &dyn ProgressObserver,
) -> Result<Vec<RunReport>, SquareError> {
    strategies
        .iter()
        .map(|&strategy| run_strategy(strategy, inputs, opts, observer))
        .collect()
}

/// Run both strategies over the same inputs and check they agree.
pub fn compare(
    inputs: &[i64],
    opts: &RunOptions,
    observer: &dyn ProgressObserver,
) -> Result<Comparison, SquareError> {
    let sequential = run_strategy(Strategy::Sequential, inputs, opts, observer)?;
    let pooled = run_strategy(Strategy::Pooled, inputs, opts, observer)?;
    let comparison = Comparison { sequential, pooled };
    if !comparison.results_match() {
        return Err(SquareError::Mismatch);
    }
    Ok(comparison)
}

/// Analyze reports for mismatched result sequences.
pub fn analyze_comparison_results(reports: &[RunReport]) -> Result<(), SquareError> {
    let Some((first, rest)) = reports.split_first() else {
        return Ok(());
    };
    if rest.iter().any(|r| r.results != first.results) {
        return Err(SquareError::Mismatch);
    }
    Ok(())
}

/// Pair up a sequential and a pooled report, if both are present.
#[must_use]
pub fn comparison_from_reports(reports: &[RunReport]) -> Option<Comparison> {
    let find = |s: Strategy| reports.iter().find(|r| r.strategy == s).cloned();
    Some(Comparison {
        sequential: find(Strategy::Sequential)?,
        pooled: find(Strategy::Pooled)?,
    })
}
