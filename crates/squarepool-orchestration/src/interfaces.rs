//! Orchestration interfaces.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

/// Execution strategy for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One task at a time on the calling thread.
    Sequential,
    /// All tasks submitted to a bounded worker pool.
    Pooled,
}

impl Strategy {
    /// Lowercase name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Pooled => "pooled",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of running one strategy over an input sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Strategy that produced this report.
    pub strategy: Strategy,
    /// Workers used (1 for sequential).
    pub worker_count: usize,
    /// `results[i]` is the output for `inputs[i]`.
    pub results: Vec<i64>,
    /// Wall-clock time of the whole run.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Sequential and pooled reports for the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Report from the sequential run.
    pub sequential: RunReport,
    /// Report from the pooled run.
    pub pooled: RunReport,
}

impl Comparison {
    /// How many times faster the pooled run was. `None` if it took no time.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        let pooled = self.pooled.elapsed.as_secs_f64();
        if pooled > 0.0 {
            Some(self.sequential.elapsed.as_secs_f64() / pooled)
        } else {
            None
        }
    }

    /// Whether both strategies produced identical result sequences.
    #[must_use]
    pub fn results_match(&self) -> bool {
        self.sequential.results == self.pooled.results
    }
}

/// Trait for presenting run reports to the user.
pub trait ResultPresenter: Send + Sync {
    /// Called before a strategy starts running.
    fn present_start(&self, strategy: Strategy, worker_count: usize, inputs: &[i64]);

    /// Present the report of a finished strategy.
    fn present_report(&self, report: &RunReport);

    /// Present the closing comparison of both strategies.
    fn present_comparison(&self, comparison: &Comparison);

    /// Present an error.
    fn present_error(&self, error: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(strategy: Strategy, results: Vec<i64>, millis: u64) -> RunReport {
        RunReport {
            strategy,
            worker_count: 1,
            results,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::Sequential.to_string(), "sequential");
        assert_eq!(Strategy::Pooled.name(), "pooled");
    }

    #[test]
    fn speedup_and_match() {
        let cmp = Comparison {
            sequential: report(Strategy::Sequential, vec![4, 9], 4500),
            pooled: report(Strategy::Pooled, vec![4, 9], 1500),
        };
        let speedup = cmp.speedup().unwrap();
        assert!((speedup - 3.0).abs() < 1e-9);
        assert!(cmp.results_match());
    }

    #[test]
    fn speedup_undefined_for_zero_time() {
        let cmp = Comparison {
            sequential: report(Strategy::Sequential, vec![], 0),
            pooled: report(Strategy::Pooled, vec![], 0),
        };
        assert_eq!(cmp.speedup(), None);
    }

    #[test]
    fn report_serializes_seconds() {
        let json = serde_json::to_value(report(Strategy::Pooled, vec![4], 1500)).unwrap();
        assert_eq!(json["strategy"], "pooled");
        assert_eq!(json["elapsed_secs"], 1.5);
        assert_eq!(json["results"][0], 4);
    }
}
