//! Document page generation for converted LaTeX blocks

use maud::{Markup, html};

use crate::components::layout::{Stylesheet, page_wrapper};

/// Data container for document page generation.
#[derive(Debug, Clone, Copy)]
pub struct DocumentPageData<'a> {
    pub title: &'a str,
    pub environment: &'a str,
    pub blocks: &'a [String],
}

/// Generates HTML page showing converted environment contents
///
/// Each block becomes its own section. Block text is HTML escaped and left
/// otherwise untouched, so MathJax finds the `\(...\)` and `\[...\]`
/// delimiters in the rendered text nodes.
///
/// # Arguments
///
/// * `data`: Page title, environment name and converted blocks
/// * `stylesheet`: Inline CSS or path to a CSS file
///
/// # Returns
///
/// Complete HTML markup for the document page
///
/// # Examples
///
/// ```
/// use texjax::pages::document::{DocumentPageData, generate};
/// use texjax::components::layout::Stylesheet;
///
/// let blocks = vec![r"Let \(x\) be real.".to_string()];
/// let html = generate(
///     DocumentPageData { title: "Notes", environment: "document", blocks: &blocks },
///     Stylesheet::Linked("assets/document.css"),
/// );
/// assert!(html.into_string().contains(r"\(x\)"));
/// ```
pub fn generate(data: DocumentPageData<'_>, stylesheet: Stylesheet<'_>) -> Markup {
    let body = html! {
        header class="document-header" {
            h1 class="document-title" { (data.title) }
            span class="document-meta" {
                (data.blocks.len()) " " code { (data.environment) } " block(s)"
            }
        }

        main class="document" {
            @if data.blocks.is_empty() {
                p class="empty-state" {
                    "No " code { (data.environment) } " environment found"
                }
            } @else {
                @for (index, block) in data.blocks.iter().enumerate() {
                    section class="block" id=(format!("block-{}", index + 1)) {
                        (block)
                    }
                }
            }
        }
    };

    page_wrapper(data.title, stylesheet, body)
}
