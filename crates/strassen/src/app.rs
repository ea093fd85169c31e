//! Application entry point and dispatch.

use anyhow::{Context, Result};

use strassen_cli::output::write_to_file;
use strassen_cli::presenter::CLIResultPresenter;
use strassen_cli::ui::print_success;
use strassen_core::registry::DefaultFactory;
use strassen_core::Matrix;
use strassen_orchestration::interfaces::{CalculationResult, ResultPresenter};
use strassen_orchestration::orchestrator::{
    analyze_comparison_results, execute_multiplications,
};
use strassen_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::AppConfig;
use crate::input::load_matrix;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let left_path = config.left.as_deref().context("missing left operand")?;
    let right_path = config.right.as_deref().context("missing right operand")?;
    if left_path == "-" && right_path == "-" {
        anyhow::bail!("only one operand can be read from stdin");
    }
    let a = load_matrix(left_path)?;
    let b = load_matrix(right_path)?;

    let opts = config.options();
    let factory = DefaultFactory::<f64>::new(opts.clone());
    let strategies = get_strategies_to_run(&config.algo, &factory)?;

    let results = execute_multiplications(&strategies, &a, &b);
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, opts.clone());

    // Cross-validate before presenting anything
    if results.len() > 1 {
        report_failures(&presenter, &results);
        if let Err(e) = analyze_comparison_results(&results, opts.tolerance) {
            presenter.present_comparison(&results);
            return Err(e.into());
        }
    }

    let (result, product) = first_success(&results)?;
    presenter.present_result(
        &result.algorithm,
        a.dimensions(),
        b.dimensions(),
        product,
        result.duration,
        config.details,
    );
    if results.len() > 1 {
        presenter.present_comparison(&results);
        if !config.quiet {
            let succeeded = results.iter().filter(|r| r.is_ok()).count();
            print_success(&format!(
                "{succeeded} strategies agree within {}",
                opts.tolerance
            ));
        }
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, product).with_context(|| format!("failed to write {path}"))?;
        tracing::info!(path = %path, dims = %product.dimensions(), "product written");
    }

    Ok(())
}

/// Present every failed run with its cause; returns how many failed.
pub(crate) fn report_failures(
    presenter: &dyn ResultPresenter<f64>,
    results: &[CalculationResult<f64>],
) -> usize {
    let mut failed = 0;
    for result in results {
        if let Err(e) = &result.outcome {
            presenter.present_error(&result.algorithm, e);
            failed += 1;
        }
    }
    failed
}

/// The first successful run, or the first run's error.
fn first_success(
    results: &[CalculationResult<f64>],
) -> Result<(&CalculationResult<f64>, &Matrix<f64>)> {
    if let Some(found) = results.iter().find_map(|r| r.product().map(|p| (r, p))) {
        return Ok(found);
    }
    match results.first().map(|r| &r.outcome) {
        Some(Err(e)) => Err(e.clone().into()),
        _ => anyhow::bail!("no strategy was run"),
    }
}
