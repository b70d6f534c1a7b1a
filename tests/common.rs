//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing LaTeX sources into temporary directories
//! and running the texjax binary against them.

#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Lecture notes exercising every delimiter form.
pub const LECTURE_NOTES: &str = r"\documentclass{article}
\usepackage{amsmath}
% preamble comment
\begin{document}
    Let $f$ be continuous on $[a, b]$. % assumption
    Then
    $$
    \int_a^b f(x)\,dx = F(b) - F(a)
    $$
    and
    \begin{align*}
        F'(x) &= f(x)
    \end{align*}
\end{document}
";

/// Writes file into directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates temporary directory holding `notes.tex` with [`LECTURE_NOTES`].
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_notes() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "notes.tex", LECTURE_NOTES)?;
    Ok((dir, path))
}

/// Runs the texjax binary with arguments.
///
/// # Errors
///
/// Returns error if the process cannot be spawned
pub fn texjax(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_texjax")).args(args).output()?)
}

/// Runs the texjax binary feeding `input` on standard input.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or stdin cannot be written
pub fn texjax_stdin(args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_texjax"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    Ok(child.wait_with_output()?)
}
