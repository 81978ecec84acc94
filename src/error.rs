use std::path::PathBuf;
use thiserror::Error;

/// Foldertree error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a directory path is required\n\nUsage: foldertree [OPTIONS] <PATH>...")]
    MissingPath,

    #[error("cannot access path '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{}' is a file, not a folder. Provide a directory path.", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("cannot determine executable path: {0}")]
    ExecutablePath(std::io::Error),

    #[error("Error writing '{file}': {source}")]
    Write {
        file: String,
        source: std::io::Error,
    },

    #[error("Error rendering '{file}': {source}")]
    Render {
        file: String,
        source: tera::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),
}

/// Result type alias for foldertree operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an access error for a path that could not be stat'ed
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Access {
            path: path.into(),
            source,
        }
    }

    /// Create a render error for an output file
    pub fn render(file: impl Into<String>, source: tera::Error) -> Self {
        Error::Render {
            file: file.into(),
            source,
        }
    }

    /// Create a write error for an output file
    pub fn write(file: impl Into<String>, source: std::io::Error) -> Self {
        Error::Write {
            file: file.into(),
            source,
        }
    }
}
