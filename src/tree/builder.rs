// Recursive directory scanner
//
// Only the root can fail the scan. Below it, entries that cannot be
// stat'ed are dropped and directories that cannot be listed keep an
// empty child list.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::tree::node::{display_name, Node};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Builds an owned [`Node`] tree from the filesystem
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    max_depth: Option<usize>,
}

impl TreeBuilder {
    /// Create a builder with no depth limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from scan settings
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new().with_max_depth(config.max_depth)
    }

    /// Stop descending below `max_depth` levels under the root
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Scan `path` into a tree
    ///
    /// Fails if the root cannot be stat'ed or, when it is a directory,
    /// cannot be listed.
    pub fn build(&self, path: &Path) -> Result<Node> {
        let metadata = fs::metadata(path).map_err(|e| Error::access(path, e))?;
        let mut root = leaf(path, metadata.is_dir());

        if root.is_dir {
            let entries = list_entries(path).map_err(|source| Error::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            root.children = self.build_children(entries, 1);
        }

        let (dirs, files) = root.count();
        info!(root = %path.display(), dirs, files, "scan complete");
        Ok(root)
    }

    /// Build the node for one entry below the root; `None` drops it
    fn build_entry(&self, path: PathBuf, depth: usize) -> Option<Node> {
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                return None;
            }
        };

        let mut node = leaf(&path, metadata.is_dir());
        if !node.is_dir {
            return Some(node);
        }

        if self.max_depth.is_some_and(|max| depth >= max) {
            debug!(path = %path.display(), depth, "depth limit reached");
            return Some(node);
        }

        match list_entries(&path) {
            Ok(entries) => node.children = self.build_children(entries, depth + 1),
            Err(e) => debug!(path = %path.display(), error = %e, "cannot list directory"),
        }

        Some(node)
    }

    fn build_children(&self, entries: Vec<PathBuf>, depth: usize) -> Vec<Node> {
        entries
            .into_iter()
            .filter_map(|entry| self.build_entry(entry, depth))
            .collect()
    }
}

fn leaf(path: &Path, is_dir: bool) -> Node {
    Node {
        name: display_name(path),
        path: path.to_path_buf(),
        is_dir,
        children: Vec::new(),
    }
}

/// List the immediate entries of `dir`, sorted by name case-insensitively
///
/// Errors on individual entries are skipped; an error opening `dir`
/// itself is returned.
fn list_entries(dir: &Path) -> std::result::Result<Vec<PathBuf>, walkdir::Error> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(compare_names)
    {
        match entry {
            Ok(entry) => entries.push(entry.into_path()),
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => debug!(error = %e, "skipping unlistable entry"),
        }
    }

    Ok(entries)
}

/// Case-insensitive name order; `sort_by` is stable so equal keys keep listing order
fn compare_names(a: &DirEntry, b: &DirEntry) -> Ordering {
    sort_key(&a.file_name().to_string_lossy()).cmp(&sort_key(&b.file_name().to_string_lossy()))
}

fn sort_key(name: &str) -> String {
    name.to_lowercase()
}
