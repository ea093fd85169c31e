//! UI helpers for CLI display.
//!
//! Line builders take an explicit `color` flag so the plain form can be
//! checked without touching the environment; the `print_*` wrappers read
//! `NO_COLOR` once per call.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Outcome tag shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    fn tag(self, color: bool) -> String {
        let text = match self {
            Self::Ok => "[OK]",
            Self::Error => "[ERROR]",
        };
        match (self, color) {
            (_, false) => text.to_string(),
            (Self::Ok, true) => style(text).green().bold().to_string(),
            (Self::Error, true) => style(text).red().bold().to_string(),
        }
    }
}

/// `=== text ===`, bold cyan when colored.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        style(line).bold().cyan().to_string()
    } else {
        line
    }
}

/// Tag followed by `text`, with an optional bold subject such as a
/// strategy name.
#[must_use]
pub fn status_line(status: Status, subject: Option<&str>, text: &str, color: bool) -> String {
    let tag = status.tag(color);
    match subject {
        Some(subject) if color => format!("{tag} {}: {text}", style(subject).bold()),
        Some(subject) => format!("{tag} {subject}: {text}"),
        None => format!("{tag} {text}"),
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", status_line(Status::Ok, None, text, !is_color_disabled()));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", status_line(Status::Error, None, text, !is_color_disabled()));
}

/// Print a failed strategy run to stderr.
pub fn print_failure(algorithm: &str, error: &str) {
    eprintln!(
        "{}",
        status_line(Status::Error, Some(algorithm), error, !is_color_disabled())
    );
}
