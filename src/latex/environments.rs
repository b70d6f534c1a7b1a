//! Environment extraction.

use log::debug;

use super::normalize;

/// Single `\begin{name}...\end{name}` match in a LaTeX document.
///
/// Borrows from the scanned text. The literal covers both markers, the body
/// only what lies between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentSpan<'a> {
    literal: &'a str,
    body: &'a str,
}

impl<'a> EnvironmentSpan<'a> {
    /// Returns the full matched text including begin and end markers.
    pub fn literal(&self) -> &'a str {
        self.literal
    }

    /// Returns the text between the markers, untouched.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Finds every occurrence of an environment without normalizing it.
///
/// Scans left to right. Each begin marker is paired with the first end
/// marker after it, and scanning resumes after that end marker, so matches
/// never overlap. Nested environments of the same name are not balanced:
/// the inner end marker closes the outer begin marker. A begin marker with
/// no end marker after it is ignored.
///
/// The name is matched literally, so `align*` only finds starred aligns.
///
/// # Arguments
///
/// * `latex`: LaTeX source to scan
/// * `env_name`: Environment name between the braces
///
/// # Returns
///
/// Matches in document order, empty when the environment never occurs
pub fn find_environments<'a>(latex: &'a str, env_name: &str) -> Vec<EnvironmentSpan<'a>> {
    let begin = format!("\\begin{{{}}}", env_name);
    let end = format!("\\end{{{}}}", env_name);

    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = latex[pos..].find(&begin) {
        let start = pos + offset;
        let body_start = start + begin.len();

        // Without a closing marker no later begin can match either
        let body_end = match latex[body_start..].find(&end) {
            Some(offset) => body_start + offset,
            None => break,
        };
        let span_end = body_end + end.len();

        spans.push(EnvironmentSpan {
            literal: &latex[start..span_end],
            body: &latex[body_start..body_end],
        });

        pos = span_end;
    }

    spans
}

/// Extracts the normalized contents of every occurrence of an environment.
///
/// Markers are not included in the result. Each body is run through
/// [`normalize`], so callers receive MathJax ready text with indentation
/// and comments removed.
///
/// # Arguments
///
/// * `latex`: LaTeX source to scan
/// * `env_name`: Environment name between the braces
///
/// # Returns
///
/// Normalized bodies in document order, empty when the environment never
/// occurs
pub fn get_environments(latex: &str, env_name: &str) -> Vec<String> {
    let spans = find_environments(latex, env_name);
    debug!("Found {} `{}` environment(s)", spans.len(), env_name);

    spans.iter().map(|span| normalize(span.body())).collect()
}
