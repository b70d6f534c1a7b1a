//! LaTeX to MathJax text conversion.
//!
//! This module provides the text transforms applied to LaTeX sources before
//! handing them to a browser side MathJax renderer: comment stripping,
//! indentation removal, environment extraction and math delimiter
//! rewriting. Every transform is a pure function of its input.

mod comments;
mod environments;
mod mathjax;
mod whitespace;

pub use comments::remove_comments;
pub use environments::{EnvironmentSpan, find_environments, get_environments};
pub use mathjax::{BLOCK_ENVIRONMENTS, replace_to_mathjax};
pub use whitespace::remove_leading_whitespace;

/// Prepares a block of LaTeX for MathJax.
///
/// Removes indentation, rewrites math delimiters, then strips comments.
pub fn normalize(latex: &str) -> String {
    let latex = remove_leading_whitespace(latex);
    let latex = replace_to_mathjax(&latex);
    remove_comments(&latex)
}
