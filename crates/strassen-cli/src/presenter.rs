//! CLI result presenter.

use std::time::Duration;

use strassen_core::padding::padded_side;
use strassen_core::recursive::scalar_multiplications;
use strassen_core::{Dimensions, Element, Matrix, Options, StrassenError};
use strassen_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_number};
use crate::ui::{print_failure, print_header};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    opts: Options,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, opts: Options) -> Self {
        Self {
            verbose,
            quiet,
            opts,
        }
    }

    fn print_details(&self, left: Dimensions, right: Dimensions) {
        let side = padded_side(left, right);
        let naive = (left.rows as u64)
            .saturating_mul(left.cols as u64)
            .saturating_mul(right.cols as u64);
        println!("Padded side: {side}");
        println!(
            "Scalar multiplications (Strassen): {}",
            format_number(scalar_multiplications(side, &self.opts))
        );
        println!("Scalar multiplications (naive): {}", format_number(naive));
    }
}

impl<T: Element> ResultPresenter<T> for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        left: Dimensions,
        right: Dimensions,
        product: &Matrix<T>,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{product}");
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Operands: {left} x {right}");
        println!("Duration: {}", format_duration(duration));

        if details {
            self.print_details(left, right);
        }

        println!("Product ({}):", product.dimensions());
        println!("{}", format_matrix(product, self.verbose));
    }

    fn present_comparison(&self, results: &[CalculationResult<T>]) {
        if self.quiet {
            return;
        }

        println!();
        print_header("Comparison Results");
        for result in results {
            let status = if result.is_ok() { "OK" } else { "ERROR" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, algorithm: &str, error: &StrassenError) {
        print_failure(algorithm, &error.to_string());
    }
}
