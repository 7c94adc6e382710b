//! Static HTML site generation.
//!
//! For each framework: render every page to a styled HTML document whose
//! output path mirrors the source's relative path, then generate a
//! framework index listing the rendered pages with a client-side search
//! filter. After all frameworks, a global index lists each framework with
//! its page count.
//!
//! HTML is produced with [maud](https://maud.lambda.xyz/) — templates are
//! type-checked Rust with automatic escaping — and styled by stylesheets
//! embedded at compile time. Rerunning with unchanged inputs overwrites
//! previous outputs with identical content.

use crate::content;
use crate::discover::{self, Page};
use crate::render::{self, Rendered};
use crate::types::{Layout, PageFailure};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PAGE_CSS: &str = include_str!("../static/page.css");
const INDEX_CSS: &str = include_str!("../static/index.css");
const HOME_CSS: &str = include_str!("../static/home.css");
const FILTER_JS: &str = include_str!("../static/filter.js");

const PROGRESS_EVERY: usize = 100;

/// Minimum heading count before a page gets a "Contents" block.
const TOC_MIN_HEADINGS: usize = 2;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("discovery error: {0}")]
    Discover(#[from] discover::DiscoverError),
}

/// What one framework produced.
#[derive(Debug)]
pub struct FrameworkSummary {
    pub name: String,
    /// Relative `.html` paths of successfully rendered pages, in discovery order.
    pub rendered: Vec<PathBuf>,
    pub failed: Vec<PageFailure>,
}

impl FrameworkSummary {
    pub fn page_count(&self) -> usize {
        self.rendered.len()
    }
}

/// What a whole site build produced.
#[derive(Debug)]
pub struct SiteSummary {
    /// Processed frameworks, sorted by name (the global index order).
    pub frameworks: Vec<FrameworkSummary>,
    /// Path of the generated global index.
    pub index_path: PathBuf,
}

impl SiteSummary {
    pub fn total_pages(&self) -> usize {
        self.frameworks.iter().map(FrameworkSummary::page_count).sum()
    }
}

/// An entry in a framework index.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Relative path minus extension.
    pub title: String,
    /// Relative path with the `.html` extension.
    pub href: String,
}

/// Build the HTML site for the given frameworks plus the global index.
///
/// Frameworks without pages are skipped with a warning; they do not appear
/// in the global index.
pub fn build_site(layout: &Layout, frameworks: &[String]) -> Result<SiteSummary, SiteError> {
    fs::create_dir_all(&layout.html_dir)?;

    let mut summaries = Vec::new();
    for framework in frameworks {
        match build_framework(layout, framework)? {
            Some(summary) => summaries.push(summary),
            None => println!("Warning: no markdown files found for {framework}, skipping"),
        }
    }

    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    let index_path = layout.html_dir.join("index.html");
    fs::write(&index_path, render_global_index(&summaries).into_string())?;

    Ok(SiteSummary {
        frameworks: summaries,
        index_path,
    })
}

/// Render one framework's pages and its index. `None` when it has no pages.
fn build_framework(
    layout: &Layout,
    framework: &str,
) -> Result<Option<FrameworkSummary>, SiteError> {
    let pages = discover::discover_pages(&layout.markdown_dir, framework)?;
    if pages.is_empty() {
        return Ok(None);
    }

    println!("Processing {framework}: {} pages", pages.len());
    let out_dir = layout.html_dir.join(framework);
    fs::create_dir_all(&out_dir)?;

    let mut rendered = Vec::new();
    let mut failed = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        if (i + 1) % PROGRESS_EVERY == 0 {
            println!("  Converted {}/{} pages...", i + 1, pages.len());
        }
        match render_page_file(page, framework, &out_dir) {
            Ok(rel_html) => rendered.push(rel_html),
            Err(err) => {
                println!("  Warning: skipping {}: {err}", page.rel_path.display());
                failed.push(PageFailure {
                    rel_path: page.rel_path.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let entries: Vec<IndexEntry> = rendered
        .iter()
        .map(|rel_html| IndexEntry {
            title: content::page_title(rel_html),
            href: rel_html.to_string_lossy().into_owned(),
        })
        .collect();
    let index = render_framework_index(framework, &entries);
    fs::write(out_dir.join("index.html"), index.into_string())?;

    Ok(Some(FrameworkSummary {
        name: framework.to_string(),
        rendered,
        failed,
    }))
}

/// Read, normalize, render, and write one page. Returns the relative
/// output path.
fn render_page_file(page: &Page, framework: &str, out_dir: &Path) -> std::io::Result<PathBuf> {
    let raw = fs::read_to_string(&page.path)?;
    let body = content::normalized_body(&raw);
    let rendered = render::render_markdown(body);
    let title = content::page_title(&page.rel_path);

    let markup = render_page(&title, framework, page.depth, &rendered);

    let rel_html = page.rel_path.with_extension("html");
    let out_path = out_dir.join(&rel_html);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, markup.into_string())?;
    Ok(rel_html)
}

// ============================================================================
// Templates
// ============================================================================

/// Base HTML document: head with embedded stylesheet, body content.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// One documentation page: breadcrumb header, optional contents block,
/// rendered body, back-link.
///
/// Link prefixes are computed from the page's depth so nested pages still
/// reach the framework index and the site root.
pub fn render_page(title: &str, framework: &str, depth: usize, rendered: &Rendered) -> Markup {
    let up = "../".repeat(depth.saturating_sub(1));
    let framework_index = format!("{up}index.html");
    let home = format!("../{up}index.html");

    let content = html! {
        div.container {
            header {
                div.breadcrumb {
                    a href=(home) { "Home" }
                    " › "
                    a href=(framework_index) { (framework) }
                    " › "
                    (title)
                }
                h1 { (title) }
            }
            div.content {
                a.back-link href=(framework_index) { "← Back to " (framework) }
                @if rendered.toc.len() >= TOC_MIN_HEADINGS {
                    nav.toc {
                        strong { "Contents" }
                        ul {
                            @for entry in &rendered.toc {
                                li class={ "toc-level-" (entry.level) } {
                                    a href={ "#" (entry.id) } { (entry.title) }
                                }
                            }
                        }
                    }
                }
                (PreEscaped(&rendered.html))
            }
        }
    };

    base_document(&format!("{title} - {framework}"), PAGE_CSS, content)
}

/// Framework index: every rendered page as a link, with a client-side
/// substring filter over the list.
pub fn render_framework_index(framework: &str, entries: &[IndexEntry]) -> Markup {
    let content = html! {
        div.container {
            a.back-link href="../index.html" { "← Back to Home" }
            h1 { (framework) }
            div.subtitle { (entries.len()) " pages" }
            div.search {
                input type="text" id="search" placeholder="Search..." autocomplete="off";
            }
            ul id="page-list" {
                @for entry in entries {
                    li {
                        a href=(entry.href) { (entry.title) }
                    }
                }
            }
        }
        script { (PreEscaped(FILTER_JS)) }
    };

    base_document(&format!("{framework} Documentation"), INDEX_CSS, content)
}

/// Global landing page: frameworks sorted by name with page counts and an
/// aggregate total.
pub fn render_global_index(summaries: &[FrameworkSummary]) -> Markup {
    let total: usize = summaries.iter().map(FrameworkSummary::page_count).sum();

    let content = html! {
        div.container {
            h1 { "Developer Documentation" }
            div.subtitle { "Offline Archive" }
            div.stats {
                strong { (summaries.len()) }
                " frameworks • "
                strong { (total) }
                " pages"
            }
            ul {
                @for summary in summaries {
                    li {
                        a href={ (summary.name) "/index.html" } {
                            (summary.name)
                            " "
                            span.count { "(" (summary.page_count()) " pages)" }
                        }
                    }
                }
            }
        }
    };

    base_document("Developer Documentation - Offline Archive", HOME_CSS, content)
}
