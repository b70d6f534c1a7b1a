//! Reusable HTML components for page generation
//!
//! Maud component functions shared by generated pages. The layout wrapper
//! owns everything MathJax needs, so pages only render their own content.

pub mod layout;
