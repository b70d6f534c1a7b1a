//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// MathJax v3 bundle with TeX input and CHTML output.
const MATHJAX_SRC: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js";

/// Delimiter configuration matching the converter output.
const MATHJAX_CONFIG: &str = r"window.MathJax = {
  tex: {
    inlineMath: [['\\(', '\\)']],
    displayMath: [['\\[', '\\]']],
    processEscapes: true
  }
};";

/// Where a page gets its stylesheet from
#[derive(Debug, Clone, Copy)]
pub enum Stylesheet<'a> {
    /// CSS text embedded in a `<style>` element
    Inline(&'a str),
    /// Path of a CSS file relative to the page
    Linked(&'a str),
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head with viewport and charset, the MathJax
/// configuration followed by the MathJax loader, and the container
/// structure. The caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheet`: Inline CSS or path to a CSS file
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheet: Stylesheet<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - texjax" }
                @match stylesheet {
                    Stylesheet::Inline(css) => {
                        style { (PreEscaped(css)) }
                    },
                    Stylesheet::Linked(href) => {
                        link rel="stylesheet" href=(href);
                    },
                }
                // Configuration must be set before the loader runs
                script { (PreEscaped(MATHJAX_CONFIG)) }
                script id="MathJax-script" async src=(MATHJAX_SRC) {}
            }
            body {
                div class="container" {
                    (body)
                }
                footer class="page-footer" {
                    "Converted with texjax"
                }
            }
        }
    }
}
