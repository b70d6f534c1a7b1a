//! LaTeX to MathJax converter.

mod assets;
pub mod components;
mod config;
mod latex;
pub mod pages;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

pub use assets::{document_css, write_css_assets};
pub use config::{Config, STDIN_PATH};
pub use latex::{
    BLOCK_ENVIRONMENTS, EnvironmentSpan, find_environments, get_environments, normalize,
    remove_comments, remove_leading_whitespace, replace_to_mathjax,
};

/// Reads a LaTeX file and converts every occurrence of an environment.
///
/// Convenience wrapper that reads the file and runs [`get_environments`].
///
/// # Arguments
///
/// * `path`: Path to LaTeX source file
/// * `env_name`: Environment whose contents are converted
///
/// # Returns
///
/// Converted environment bodies in document order
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8
pub fn convert_file(path: impl AsRef<Path>, env_name: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let latex = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read LaTeX file: {}", path.display()))?;
    debug!("Read {} bytes from {}", latex.len(), path.display());

    Ok(get_environments(&latex, env_name))
}
