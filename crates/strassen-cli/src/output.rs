//! CLI output formatting.

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use strassen_core::{Element, Matrix};

/// Rows/columns shown before a matrix is elided in non-verbose output.
pub const PREVIEW_SIZE: usize = 8;

/// Format a matrix for display, one row per line.
///
/// Unless `verbose`, matrices larger than [`PREVIEW_SIZE`] in either
/// dimension show only their top-left block followed by a shape line.
#[must_use]
pub fn format_matrix<T: Element>(m: &Matrix<T>, verbose: bool) -> String {
    let dims = m.dimensions();
    if verbose || (dims.rows <= PREVIEW_SIZE && dims.cols <= PREVIEW_SIZE) {
        return m.to_string();
    }

    let mut lines: Vec<String> = m
        .rows()
        .take(PREVIEW_SIZE)
        .map(|row| {
            let mut line = row
                .iter()
                .take(PREVIEW_SIZE)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            if dims.cols > PREVIEW_SIZE {
                line.push_str(" ...");
            }
            line
        })
        .collect();
    if dims.rows > PREVIEW_SIZE {
        lines.push("...".to_string());
    }
    lines.push(format!("({dims} matrix, use --verbose to print all)"));
    lines.join("\n")
}

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

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write a matrix to `path` as a JSON array of rows.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, m: &Matrix<f64>) -> io::Result<()> {
    tracing::debug!(path, dims = %m.dimensions(), "writing product");
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer(&mut writer, m)?;
    writeln!(writer)?;
    writer.flush()
}
