//! Loading operand matrices from JSON.

use std::io::Read;

use anyhow::{Context, Result};

use strassen_core::{Matrix, StrassenError};

/// Parse a JSON array of rows into a matrix.
///
/// Malformed JSON is reported as a plain error; well-formed but empty or
/// ragged input surfaces as [`StrassenError::Shape`].
pub fn parse_matrix(text: &str) -> Result<Matrix<f64>> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(text).context("expected a JSON array of numeric rows")?;
    Ok(Matrix::from_rows(&rows).map_err(StrassenError::from)?)
}

/// Load a matrix from `path`, or from stdin when `path` is `-`.
pub fn load_matrix(path: &str) -> Result<Matrix<f64>> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read matrix from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };
    let matrix = parse_matrix(&text).with_context(|| format!("invalid matrix in {path}"))?;
    tracing::debug!(path, dims = %matrix.dimensions(), "loaded operand");
    Ok(matrix)
}
