//! Page generation modules
//!
//! Each page module renders one view over converted LaTeX and relies on
//! the shared layout component for MathJax setup.

pub mod document;
