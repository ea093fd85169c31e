//! Application configuration from CLI flags and environment.

use clap::Parser;

use strassen_core::Options;

/// Strassen-rs: multiply two matrices with Strassen's algorithm.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Left operand: JSON file with an array of rows ("-" for stdin).
    #[arg(short = 'a', long, env = "STRASSEN_LEFT", required_unless_present = "completion")]
    pub left: Option<String>,

    /// Right operand: JSON file with an array of rows ("-" for stdin).
    #[arg(short = 'b', long, env = "STRASSEN_RIGHT", required_unless_present = "completion")]
    pub right: Option<String>,

    /// Strategy to use: naive, strassen, parallel, or all.
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Verbose output (print large products in full).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show padding and multiplication counts.
    #[arg(short, long)]
    pub details: bool,

    /// Write the product to this file as JSON.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Side length from which sub-products run in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Side length at or below which the naive kernel is used (0 = pure Strassen).
    #[arg(long, default_value = "0")]
    pub strassen_threshold: usize,

    /// Absolute tolerance when comparing strategies with --algo all.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            strassen_threshold: self.strassen_threshold,
            parallel_threshold: self.parallel_threshold,
            parallel: false,
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        }
        .normalize()
    }
}
