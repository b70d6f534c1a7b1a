//! Indentation removal.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace run at the start of a line, line breaks included.
static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s+").expect("Invalid leading whitespace regex"));

/// Removes leading whitespace from each line.
///
/// Only runs anchored at a line start are removed, and such a run may
/// cross line breaks, so blank lines collapse and the result never starts
/// with an empty line. Inner and trailing whitespace stay as written.
///
/// # Arguments
///
/// * `latex`: LaTeX source, possibly spanning several lines
///
/// # Returns
///
/// Source with every line starting at its first non-whitespace character
pub fn remove_leading_whitespace(latex: &str) -> String {
    LEADING_WHITESPACE.replace_all(latex, "").into_owned()
}
