//! Shared types used by both conversion pipelines.

use std::path::{Path, PathBuf};

/// Filesystem layout derived from the base directory.
///
/// Both tools share one input/output convention:
///
/// ```text
/// <base>/markdown/<framework>/**/*.md   # input
/// <base>/pdf/<framework>_documentation.pdf
/// <base>/html/<framework>/**/*.html
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    /// Root of the Markdown input tree, one subdirectory per framework.
    pub markdown_dir: PathBuf,
    /// Output directory for combined PDFs (and the transient combined markdown).
    pub pdf_dir: PathBuf,
    /// Output directory for the generated HTML site.
    pub html_dir: PathBuf,
}

impl Layout {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            markdown_dir: base_dir.join("markdown"),
            pdf_dir: base_dir.join("pdf"),
            html_dir: base_dir.join("html"),
        }
    }
}

/// A page that could not be processed.
///
/// Recorded and skipped at the page boundary so the rest of the framework
/// continues; collected into the per-framework summary.
#[derive(Debug, Clone)]
pub struct PageFailure {
    /// Path relative to the framework root.
    pub rel_path: PathBuf,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_joins_base_dir() {
        let layout = Layout::new(Path::new("/work/docs"));
        assert_eq!(layout.markdown_dir, Path::new("/work/docs/markdown"));
        assert_eq!(layout.pdf_dir, Path::new("/work/docs/pdf"));
        assert_eq!(layout.html_dir, Path::new("/work/docs/html"));
    }
}
