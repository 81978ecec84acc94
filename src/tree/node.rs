use std::path::{Path, PathBuf};

/// One filesystem entry captured at scan time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Final path segment shown in every rendering
    pub name: String,
    /// Path the entry was scanned from
    pub path: PathBuf,
    pub is_dir: bool,
    /// Sorted case-insensitively; always empty for files
    pub children: Vec<Node>,
}

impl Node {
    /// Create a file leaf
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Create a directory with the given children
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            is_dir: true,
            children,
        }
    }

    /// Count `(directories, files)` below this node, excluding itself
    pub fn count(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.count();
            if child.is_dir {
                (dirs + d + 1, files + f)
            } else {
                (dirs + d, files + f + 1)
            }
        })
    }
}

/// Display name of a path: its final segment, or the path text when it has none
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
