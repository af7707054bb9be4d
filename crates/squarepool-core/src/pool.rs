//! Fixed-size worker pool with ordered result collection.

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::task::SquareError;

/// A bounded pool of worker threads.
///
/// At most `worker_count` jobs run at once. The submitting thread blocks
/// until every job has finished and never runs jobs itself.
pub struct WorkerPool {
    pool: ThreadPool,
    worker_count: usize,
}

impl WorkerPool {
    /// Build a pool with `worker_count` threads.
    pub fn new(worker_count: usize) -> Result<Self, SquareError> {
        if worker_count == 0 {
            return Err(SquareError::Config(
                "worker count must be a positive integer".into(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("squarepool-worker-{i}"))
            .build()
            .map_err(|e| SquareError::Pool(e.to_string()))?;
        debug!(worker_count, "Worker pool created");
        Ok(Self { pool, worker_count })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run `job` once per input and collect the results in input order.
    ///
    /// Each input is its own job, so a worker picks up one input at a time.
    /// Completion order is unspecified; `result[i]` always belongs to
    /// `inputs[i]`. The first error is returned once all started jobs have
    /// drained.
    pub fn map_ordered<T, R, E, F>(&self, inputs: &[T], job: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(usize, &T) -> Result<R, E> + Sync + Send,
    {
        self.pool.install(|| {
            inputs
                .par_iter()
                .enumerate()
                .with_max_len(1)
                .map(|(i, input)| job(i, input))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(WorkerPool::new(0), Err(SquareError::Config(_))));
    }

    #[test]
    fn preserves_submission_order() {
        let pool = WorkerPool::new(3).unwrap();
        let inputs: Vec<u64> = (0..12).collect();
        // Later inputs finish first.
        let out: Result<Vec<u64>, SquareError> = pool.map_ordered(&inputs, |_, &x| {
            std::thread::sleep(Duration::from_millis(12 - x));
            Ok(x * 10)
        });
        assert_eq!(out.unwrap(), (0..12).map(|x| x * 10).collect::<Vec<_>>());
    }

    #[test]
    fn concurrency_is_bounded() {
        let pool = WorkerPool::new(2).unwrap();
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let inputs = [0u8; 8];
        let out: Result<Vec<()>, SquareError> = pool.map_ordered(&inputs, |_, _| {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(10));
            active.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        });
        assert!(out.is_ok());
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[test]
    fn error_propagates() {
        let pool = WorkerPool::new(2).unwrap();
        let inputs = [1i64, 2, 3];
        let out: Result<Vec<i64>, SquareError> = pool.map_ordered(&inputs, |_, &x| {
            if x == 2 {
                Err(SquareError::Overflow(x))
            } else {
                Ok(x)
            }
        });
        assert_eq!(out, Err(SquareError::Overflow(2)));
    }

    #[test]
    fn empty_input() {
        let pool = WorkerPool::new(1).unwrap();
        let out: Result<Vec<i64>, SquareError> = pool.map_ordered(&[] as &[i64], |_, &x| Ok(x));
        assert!(out.unwrap().is_empty());
    }

    #[test]
    fn reports_worker_count() {
        assert_eq!(WorkerPool::new(5).unwrap().worker_count(), 5);
    }
}
