//! Page discovery and deterministic ordering.
//!
//! Walks a framework's subtree under the Markdown root and returns every
//! Markdown file, sorted so root-level pages come first and ties break
//! case-insensitively by relative path. The order is a pure function of the
//! file set — repeated runs on unchanged input produce identical sequences
//! regardless of filesystem enumeration order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One Markdown source document belonging to a framework.
#[derive(Debug, Clone)]
pub struct Page {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Path relative to the framework root.
    pub rel_path: PathBuf,
    /// Number of components in `rel_path` (root-level pages have depth 1).
    pub depth: usize,
}

impl Page {
    /// Sort key: depth first, then the lowercased relative path.
    pub fn ordering_key(&self) -> (usize, String) {
        (self.depth, self.rel_path.to_string_lossy().to_lowercase())
    }
}

/// Discover every Markdown page of one framework, in stable order.
///
/// An absent framework subdirectory yields an empty sequence; callers
/// decide whether that warrants a warning.
pub fn discover_pages(markdown_dir: &Path, framework: &str) -> Result<Vec<Page>, DiscoverError> {
    let framework_dir = markdown_dir.join(framework);
    if !framework_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(&framework_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let rel_path = entry
            .path()
            .strip_prefix(&framework_dir)
            .unwrap()
            .to_path_buf();
        let depth = rel_path.components().count();
        pages.push(Page {
            path: entry.into_path(),
            rel_path,
            depth,
        });
    }

    pages.sort_by_key(Page::ordering_key);
    Ok(pages)
}

/// All framework subdirectory names under the Markdown root, sorted.
///
/// Hidden directories are ignored. A missing root yields an empty list.
pub fn list_frameworks(markdown_dir: &Path) -> Result<Vec<String>, DiscoverError> {
    if !markdown_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = fs::read_dir(markdown_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
