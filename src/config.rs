//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Command line configuration for texjax.
#[derive(Debug, Clone, Parser)]
#[command(name = "texjax", version, about, long_about = None)]
pub struct Config {
    /// LaTeX source file, `-` reads standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Environment whose contents are converted
    #[arg(short, long, default_value = "document")]
    pub environment: String,

    /// Output file, standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render a standalone HTML page that loads MathJax
    #[arg(long)]
    pub html: bool,

    /// Page title for HTML output
    #[arg(long)]
    pub title: Option<String>,

    /// Open the generated HTML page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns true when input is read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist, the environment name
    /// is empty, or `--open` is used without an HTML output file.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.environment.trim().is_empty() {
            bail!("Environment name must not be empty");
        }

        if self.open && (!self.html || self.output.is_none()) {
            bail!("--open requires --html and --output");
        }

        Ok(())
    }

    /// Returns page title from configuration or input file name.
    ///
    /// Falls back to `texjax` when reading standard input.
    pub fn page_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        if self.reads_stdin() {
            return "texjax".to_string();
        }

        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(String::from)
            .unwrap_or_else(|| "texjax".to_string())
    }
}
