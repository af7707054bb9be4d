//! CLI result presenter.

use squarepool_orchestration::{Comparison, ResultPresenter, RunReport, Strategy};

use crate::output::{format_duration, format_speedup, format_values};
use crate::ui::{print_error, print_header, print_success};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for a finished strategy.
    #[must_use]
    pub fn report_lines(&self, report: &RunReport) -> Vec<String> {
        if self.quiet {
            return vec![format_values(&report.results)];
        }

        let mut lines = vec![format!(
            "{} time: {}",
            time_label(report.strategy),
            format_duration(report.elapsed)
        )];
        if self.verbose {
            lines.push(format!(
                "Tasks: {}, workers: {}",
                report.results.len(),
                report.worker_count
            ));
        }
        lines.push(format!("Results: {}", format_values(&report.results)));
        lines
    }

    /// Summary lines for a comparison, without the closing verdict.
    #[must_use]
    pub fn comparison_lines(&self, comparison: &Comparison) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }
        vec![
            format!(
                "  {:<12} {:>12}  one task at a time",
                "Sequential",
                format_duration(comparison.sequential.elapsed)
            ),
            format!(
                "  {:<12} {:>12}  {} workers",
                "ThreadPool",
                format_duration(comparison.pooled.elapsed),
                comparison.pooled.worker_count
            ),
            format!("  Speedup: {}", format_speedup(comparison.speedup())),
        ]
    }
}

/// Section title for a strategy.
#[must_use]
pub fn strategy_title(strategy: Strategy, worker_count: usize) -> String {
    match strategy {
        Strategy::Sequential => "SEQUENTIAL".to_string(),
        Strategy::Pooled => format!("THREAD POOL ({worker_count} workers)"),
    }
}

/// Label used in per-strategy time lines.
fn time_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Sequential => "Sequential",
        Strategy::Pooled => "ThreadPool",
    }
}

/// Verdict on whether both strategies agreed: `Ok` text for success, `Err` text otherwise.
pub fn comparison_verdict(comparison: &Comparison) -> Result<&'static str, &'static str> {
    if comparison.results_match() {
        Ok("Results match")
    } else {
        Err("Results differ between strategies")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_start(&self, strategy: Strategy, worker_count: usize, inputs: &[i64]) {
        if self.quiet {
            return;
        }
        print_header(&strategy_title(strategy, worker_count));
        if self.verbose {
            println!("Inputs: {}", format_values(inputs));
        }
    }

    fn present_report(&self, report: &RunReport) {
        for line in self.report_lines(report) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, comparison: &Comparison) {
        if self.quiet {
            return;
        }

        println!("\n{:=<40}", "");
        println!("SUMMARY:");
        for line in self.comparison_lines(comparison) {
            println!("{line}");
        }
        match comparison_verdict(comparison) {
            Ok(text) => print_success(text),
            Err(text) => print_error(text),
        }
        println!("{:=<40}", "");
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
