//! Math delimiter rewriting for MathJax.
//!
//! MathJax expects `\(...\)` for inline math and `\[...\]` for display
//! math. Rewriting happens in three phases: block math is hidden behind
//! placeholders, inline dollars are rewritten, then blocks are restored.
//! Hiding first keeps the inline pattern from matching single dollars
//! inside `$$...$$` spans and display environments.

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::environments::find_environments;

/// Display environments wrapped in `\[...\]`, in collection order.
pub const BLOCK_ENVIRONMENTS: &[&str] = &[
    "align",
    "align*",
    "equation",
    "equation*",
    "gather",
    "gather*",
];

/// `$$...$$`, shortest body, may span lines.
static DISPLAY_DOLLARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("Invalid display math regex"));

/// `$...$`, shortest non-empty body on a single line.
static INLINE_DOLLARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(.+?)\$").expect("Invalid inline math regex"));

/// Block math hidden during the inline pass.
#[derive(Debug)]
struct BlockEquation<'a> {
    /// Text placed between `\[` and `\]` on restore
    content: &'a str,
    /// Exact source text the placeholder stands in for
    literal: &'a str,
}

/// Placeholder for the block at `index`.
///
/// Private use code points never show up in LaTeX sources, and the closing
/// mark keeps `1` from being a prefix of `10`.
fn placeholder(index: usize) -> String {
    format!("\u{E000}block-equation-{}\u{E001}", index)
}

fn display(content: &str) -> String {
    format!("\\[{}\\]", content)
}

/// Collects block math in the order it is hidden: each environment of
/// [`BLOCK_ENVIRONMENTS`] in turn, then every `$$...$$` span.
fn collect_blocks(latex: &str) -> Vec<BlockEquation<'_>> {
    let mut blocks = Vec::new();

    for env_name in BLOCK_ENVIRONMENTS {
        // Environment markers stay inside the display brackets
        blocks.extend(
            find_environments(latex, env_name)
                .into_iter()
                .map(|span| BlockEquation {
                    content: span.literal(),
                    literal: span.literal(),
                }),
        );
    }

    for caps in DISPLAY_DOLLARS.captures_iter(latex) {
        if let (Some(literal), Some(content)) = (caps.get(0), caps.get(1)) {
            blocks.push(BlockEquation {
                content: content.as_str(),
                literal: literal.as_str(),
            });
        }
    }

    blocks
}

/// Rewrites LaTeX math delimiters into MathJax brackets.
///
/// - `\begin{env}...\end{env}` for every name in [`BLOCK_ENVIRONMENTS`]
///   becomes `\[\begin{env}...\end{env}\]`, markers kept
/// - `$$...$$` becomes `\[...\]`
/// - remaining `$...$` on a single line becomes `\(...\)`
///
/// Blocks are substituted by content, so identical blocks appearing twice
/// are hidden and restored together. Unbalanced delimiters pass through
/// unchanged.
///
/// # Arguments
///
/// * `latex`: LaTeX source
///
/// # Returns
///
/// Source with MathJax delimiters
pub fn replace_to_mathjax(latex: &str) -> String {
    let blocks = collect_blocks(latex);
    trace!("Hiding {} block equation(s)", blocks.len());

    let mut hidden = latex.to_string();
    for (index, block) in blocks.iter().enumerate() {
        hidden = hidden.replace(block.literal, &placeholder(index));
    }

    let mut result = INLINE_DOLLARS
        .replace_all(&hidden, |caps: &Captures| format!("\\({}\\)", &caps[1]))
        .into_owned();

    for (index, block) in blocks.iter().enumerate() {
        result = result.replace(&placeholder(index), &display(block.content));
    }

    result
}
