//! CLI output formatting and JSON reports.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use squarepool_core::RunOptions;
use squarepool_orchestration::orchestrator::comparison_from_reports;
use squarepool_orchestration::RunReport;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a sequence of values as `[a, b, c]`.
#[must_use]
pub fn format_values(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Progress line printed when a task starts.
#[must_use]
pub fn format_task_started(input: i64) -> String {
    format!("Squaring {input}...")
}

/// Progress line printed when a task finishes.
#[must_use]
pub fn format_task_finished(input: i64, output: i64) -> String {
    format!("Result: {input}² = {output}")
}

/// Format a speedup factor, or `n/a` when it is undefined.
#[must_use]
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(s) => format!("{s:.2}x"),
        None => "n/a".to_string(),
    }
}

/// Machine-readable summary of a run.
#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    /// Inputs that were squared.
    pub inputs: &'a [i64],
    /// Per-task delay in seconds.
    pub delay_secs: f64,
    /// Pool size used by the pooled strategy.
    pub worker_count: usize,
    /// One report per strategy that ran.
    pub reports: &'a [RunReport],
    /// Sequential over pooled elapsed time, when both ran.
    pub speedup: Option<f64>,
    /// Whether both strategies agreed, when both ran.
    pub results_match: Option<bool>,
}

impl<'a> JsonSummary<'a> {
    /// Build a summary from the reports of one invocation.
    #[must_use]
    pub fn new(inputs: &'a [i64], opts: &RunOptions, reports: &'a [RunReport]) -> Self {
        let comparison = comparison_from_reports(reports);
        Self {
            inputs,
            delay_secs: opts.delay.as_secs_f64(),
            worker_count: opts.worker_count,
            reports,
            speedup: comparison.as_ref().and_then(|c| c.speedup()),
            results_match: comparison.as_ref().map(|c| c.results_match()),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write contents to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
