//! Comment stripping.

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment marker with the horizontal whitespace leading up to it, through
/// the end of its line.
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\r\n]*%[^\r\n]*").expect("Invalid comment regex"));

/// Removes LaTeX comments from every line.
///
/// Everything from the first `%` to the end of its line is dropped, along
/// with whitespace directly before the marker. Line terminators are kept.
/// Percent signs inside math are not protected.
///
/// # Arguments
///
/// * `latex`: LaTeX source, possibly spanning several lines
///
/// # Returns
///
/// Source with comments removed
pub fn remove_comments(latex: &str) -> String {
    COMMENT.replace_all(latex, "").into_owned()
}
