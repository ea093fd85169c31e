//! # strassen-orchestration
//!
//! Parallel strategy execution, strategy selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
