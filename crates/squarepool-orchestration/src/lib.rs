//! # squarepool-orchestration
//!
//! Sequential and pooled execution, strategy selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;

pub use interfaces::{Comparison, ResultPresenter, RunReport, Strategy};
pub use orchestrator::{
    analyze_comparison_results, compare, execute_strategies, run_pooled, run_sequential,
};
