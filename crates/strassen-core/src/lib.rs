//! # strassen-core
//!
//! Core library for Strassen-rs: a dense matrix type, Strassen's recursive
//! multiplication with power-of-two padding, a naive reference multiplier,
//! and the strategy registry used by the CLI.

pub(crate) mod base_case;
pub mod constants;
pub mod element;
pub mod error;
pub mod matrix;
pub mod naive;
pub mod options;
pub mod padding;
pub mod quadrant;
pub mod recursive;
pub mod registry;
pub mod strassen;
pub mod strategy;

// Re-exports
pub use base_case::multiply_2x2;
pub use constants::{
    exit_codes, BASE_CASE_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD,
    DEFAULT_TOLERANCE,
};
pub use element::Element;
pub use error::{ShapeError, StrassenError};
pub use matrix::{add, dimensions, subtract, Dimensions, Matrix};
pub use naive::naive_multiply;
pub use options::Options;
pub use quadrant::{join_quadrants, split_quadrants, Quadrants};
pub use recursive::strassen_recursive;
pub use registry::{DefaultFactory, StrategyFactory};
pub use strassen::{strassen, strassen_rows, strassen_with_options};
pub use strategy::Multiplier;
