// Output generation module
//
// Renders the scanned tree in every format and writes one file per
// format. Each artifact succeeds or fails on its own.

pub mod html;
pub mod markdown;
pub mod templates;
pub mod text;

pub use html::*;
pub use markdown::*;
pub use templates::*;
pub use text::*;

use crate::error::{Error, Result};
use crate::tree::Node;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output formats produced for every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Text,
    Markdown,
    Html,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [ArtifactKind::Text, ArtifactKind::Markdown, ArtifactKind::Html];

    pub const TEXT_FILE: &'static str = "Folder tree.txt";
    pub const MARKDOWN_FILE: &'static str = "Folder tree (Markdown).md";
    pub const HTML_FILE: &'static str = "Folder tree (WEB).html";

    /// Fixed file name for this format
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Text => Self::TEXT_FILE,
            ArtifactKind::Markdown => Self::MARKDOWN_FILE,
            ArtifactKind::Html => Self::HTML_FILE,
        }
    }
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::ExecutablePath)?;
    exe.parent().map(|p| p.to_path_buf()).ok_or_else(|| {
        Error::ExecutablePath(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("'{}' has no parent directory", exe.display()),
        ))
    })
}

/// Renders and writes all artifacts for a tree
pub struct OutputGenerator {
    html: HtmlRenderer,
}

impl OutputGenerator {
    /// Create a new output generator
    pub fn new() -> Result<Self> {
        Ok(Self {
            html: HtmlRenderer::new()?,
        })
    }

    /// Render `root` in the given format
    pub fn render(&self, kind: ArtifactKind, root: &Node) -> Result<String> {
        match kind {
            ArtifactKind::Text => Ok(render_text_tree(root)),
            ArtifactKind::Markdown => Ok(render_markdown(root)),
            ArtifactKind::Html => self.html.render(root),
        }
    }

    /// Write every artifact into `directory`, overwriting earlier runs
    ///
    /// Failures are recorded in the report rather than returned so the
    /// remaining artifacts are still attempted.
    pub fn generate(&self, root: &Node, directory: &Path) -> GenerationReport {
        let artifacts = ArtifactKind::ALL
            .into_iter()
            .map(|kind| ArtifactReport {
                kind,
                file_name: kind.file_name().to_string(),
                error: self.write_artifact(kind, root, directory).err(),
            })
            .collect();

        GenerationReport {
            directory: directory.to_path_buf(),
            artifacts,
        }
    }

    /// Render and write one artifact; errors name the file they belong to
    fn write_artifact(&self, kind: ArtifactKind, root: &Node, directory: &Path) -> Result<()> {
        let file_name = kind.file_name();
        let content = self.render(kind, root).map_err(|e| match e {
            Error::Template(source) => Error::render(file_name, source),
            other => other,
        })?;

        let path = directory.join(file_name);
        fs::write(&path, content).map_err(|e| Error::write(file_name, e))?;

        debug!(path = %path.display(), ?kind, "artifact written");
        Ok(())
    }
}

/// Outcome of writing one artifact
#[derive(Debug)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub error: Option<Error>,
}

/// Report of what was generated
#[derive(Debug)]
pub struct GenerationReport {
    pub directory: PathBuf,
    pub artifacts: Vec<ArtifactReport>,
}

impl GenerationReport {
    /// Artifacts that could not be rendered or written
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.artifacts.iter().filter(|a| a.error.is_some())
    }

    /// Whether every artifact was written
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Listing of the output directory and every artifact file name
    pub fn summary(&self) -> String {
        let mut summary = format!("Files created in \"{}\":", self.directory.display());
        for artifact in &self.artifacts {
            summary.push_str(&format!("\n - {}", artifact.file_name));
        }
        summary
    }

    /// Full path of an artifact
    pub fn path_of(&self, kind: ArtifactKind) -> Option<PathBuf> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| self.directory.join(&a.file_name))
    }
}
