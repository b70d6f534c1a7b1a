use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use texjax::components::layout::Stylesheet;
use texjax::pages::document::{self, DocumentPageData};
use texjax::{Config, get_environments};

/// Directory, relative to the HTML output file, holding linked stylesheets.
const ASSETS_DIR: &str = "assets";

/// Reads LaTeX source from a file or standard input.
///
/// # Errors
///
/// Returns error if the source cannot be read or is not valid UTF8
fn read_source(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        return io::read_to_string(io::stdin()).context("Failed to read standard input");
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))
}

/// Joins converted blocks into plain text output.
///
/// Every block ends with a line break and blocks are separated by one blank
/// line.
fn render_text(blocks: &[String]) -> String {
    let mut text = String::new();

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(block);
        if !block.ends_with('\n') {
            text.push('\n');
        }
    }

    text
}

/// Describes where the source was read from, for log messages.
fn source_name(config: &Config) -> String {
    if config.reads_stdin() {
        "standard input".to_string()
    } else {
        config.input.display().to_string()
    }
}

/// Renders the HTML page for converted blocks.
///
/// Pages written to a file link a stylesheet written next to them. Pages
/// sent to standard output embed the stylesheet.
///
/// # Errors
///
/// Returns error if the linked stylesheet cannot be written
fn render_html(config: &Config, blocks: &[String]) -> Result<String> {
    let title = config.page_title();
    let data = DocumentPageData {
        title: &title,
        environment: &config.environment,
        blocks,
    };

    let page = match &config.output {
        Some(output) => {
            let output_dir = output.parent().unwrap_or_else(|| Path::new(""));
            texjax::write_css_assets(&output_dir.join(ASSETS_DIR))?;
            let href = format!("{}/document.css", ASSETS_DIR);
            document::generate(data, Stylesheet::Linked(&href))
        }
        None => {
            let css = texjax::document_css();
            document::generate(data, Stylesheet::Inline(&css))
        }
    };

    Ok(page.into_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let source = read_source(&config)?;
    let blocks = get_environments(&source, &config.environment);

    if blocks.is_empty() {
        warn!(
            "No `{}` environment found in {}",
            config.environment,
            source_name(&config)
        );
    } else {
        info!(
            "Converted {} `{}` block(s)",
            blocks.len(),
            config.environment
        );
    }

    let rendered = if config.html {
        render_html(&config, &blocks)?
    } else {
        render_text(&blocks)
    };

    match &config.output {
        Some(output) => {
            fs::write(output, &rendered)
                .with_context(|| format!("Failed to write output to {}", output.display()))?;
            info!("Generated: {}", output.display());

            if config.open {
                open::that(output)
                    .with_context(|| format!("Failed to open {}", output.display()))?;
            }
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to standard output")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(output: Option<PathBuf>) -> Config {
        Config {
            input: PathBuf::from("notes.tex"),
            environment: "document".to_string(),
            output,
            html: true,
            title: None,
            open: false,
        }
    }

    #[test]
    fn test_render_text_separates_blocks() {
        // Arrange
        let blocks = vec!["first\n".to_string(), "second\nline\n".to_string()];

        // Act
        let text = render_text(&blocks);

        // Assert
        assert_eq!(text, "first\n\nsecond\nline\n");
    }

    #[test]
    fn test_render_text_terminates_unterminated_blocks() {
        // Arrange
        let blocks = vec![r"\(x\)".to_string(), r"\(y\)".to_string()];

        // Act
        let text = render_text(&blocks);

        // Assert
        assert_eq!(text, "\\(x\\)\n\n\\(y\\)\n");
    }

    #[test]
    fn test_source_name_stdin() {
        // Arrange
        let mut config = config(None);
        config.input = PathBuf::from(texjax::STDIN_PATH);

        // Act & Assert
        assert_eq!(source_name(&config), "standard input");
    }

    #[test]
    fn test_source_name_file() {
        assert_eq!(source_name(&config(None)), "notes.tex");
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_html_inline_for_stdout() -> Result<()> {
        // Arrange
        let config = config(None);
        let blocks = vec![r"\(x\)".to_string()];

        // Act
        let html = render_html(&config, &blocks)?;

        // Assert
        assert!(html.contains("<style>"), "Stdout page should inline CSS");
        assert!(html.contains("<title>notes - texjax</title>"));
        assert!(html.contains(r"\(x\)"));
        Ok(())
    }

    #[test]
    fn test_render_html_links_assets_for_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(Some(dir.path().join("out.html")));
        let blocks = vec![r"\[y\]".to_string()];

        // Act
        let html = render_html(&config, &blocks)?;

        // Assert
        assert!(html.contains("href=\"assets/document.css\""));
        assert!(
            dir.path().join("assets/document.css").exists(),
            "Stylesheet should be written next to the page"
        );
        Ok(())
    }
}
