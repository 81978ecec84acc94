//! Foldertree - render a directory tree as text, Markdown and HTML
//!
//! Scans a directory into an owned [`Node`] tree and writes three
//! renderings of it: a box-drawing text tree, a Markdown outline and a
//! self-contained HTML page with collapsible folders.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tree;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use output::{ArtifactKind, GenerationReport, OutputGenerator};
pub use tree::{Node, TreeBuilder};
