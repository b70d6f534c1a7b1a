//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const DOCUMENT_PAGE: &str = include_str!("../assets/document.css");

/// Returns the stylesheet embedded in document pages
pub fn document_css() -> String {
    bundle(&[BASE, DOCUMENT_PAGE])
}

/// Writes the document stylesheet next to generated pages
///
/// Used when pages link their stylesheet instead of inlining it.
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
    write_bundled(assets_dir, "document.css", &[BASE, DOCUMENT_PAGE])
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    fs::write(dir.join(name), bundle(parts))
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
