//! Application entry point and dispatch.

use anyhow::{Context, Result};

use squarepool_cli::output::{format_values, write_to_file, JsonSummary};
use squarepool_cli::presenter::CLIResultPresenter;
use squarepool_cli::progress::ConsoleObserver;
use squarepool_core::observer::ProgressObserver;
use squarepool_core::observers::LoggingObserver;
use squarepool_core::RunOptions;
use squarepool_orchestration::interfaces::{ResultPresenter, RunReport};
use squarepool_orchestration::orchestrator::{
    analyze_comparison_results, comparison_from_reports, execute_strategies_with_observer,
    run_strategy,
};
use squarepool_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        squarepool_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = config.run_options()?;

    if config.json {
        return run_json(config, &opts);
    }

    run_cli(config, &opts)
}

fn run_cli(config: &AppConfig, opts: &RunOptions) -> Result<()> {
    let strategies = get_strategies_to_run(&config.strategy)?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let observer: Box<dyn ProgressObserver> = if config.quiet {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(ConsoleObserver::new())
    };

    if !config.quiet {
        println!("SIMPLE PARALLEL PROCESSING");
        println!("{:=<40}", "");
        println!("Task: Square numbers {}", format_values(config.inputs()));
    }

    let mut reports: Vec<RunReport> = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        presenter.present_start(strategy, opts.worker_count, config.inputs());
        let report = run_strategy(strategy, config.inputs(), opts, observer.as_ref())?;
        presenter.present_report(&report);
        reports.push(report);
    }

    if let Some(comparison) = comparison_from_reports(&reports) {
        presenter.present_comparison(&comparison);
    }

    write_output(config, opts, &reports)?;
    analyze_comparison_results(&reports)?;
    Ok(())
}

fn run_json(config: &AppConfig, opts: &RunOptions) -> Result<()> {
    let strategies = get_strategies_to_run(&config.strategy)?;
    let reports = execute_strategies_with_observer(
        &strategies,
        config.inputs(),
        opts,
        &LoggingObserver::new(),
    )?;

    let json = JsonSummary::new(config.inputs(), opts, &reports)
        .to_json()
        .context("failed to serialize report")?;
    println!("{json}");

    write_output(config, opts, &reports)?;
    analyze_comparison_results(&reports)?;
    Ok(())
}

fn write_output(config: &AppConfig, opts: &RunOptions, reports: &[RunReport]) -> Result<()> {
    let Some(path) = &config.output else {
        return Ok(());
    };
    let json = JsonSummary::new(config.inputs(), opts, reports)
        .to_json()
        .context("failed to serialize report")?;
    write_to_file(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Report written");
    Ok(())
}
