//! CLI output formatting.
//!
//! Each report has a `format_*` function returning `Vec<String>` (pure, no
//! I/O, unit-testable) and a `print_*` wrapper that writes to stdout.

use crate::config::FrameworkConfig;
use crate::pdf::PdfOutcome;
use crate::site::{FrameworkSummary, SiteSummary};
use crate::types::PageFailure;

/// A row in the `list` inventory.
#[derive(Debug)]
pub struct FrameworkListing {
    pub name: String,
    pub config: FrameworkConfig,
    pub pages: usize,
}

fn format_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

fn skipped_lines(skipped: &[PageFailure]) -> Vec<String> {
    skipped
        .iter()
        .map(|failure| format!("    skipped {}: {}", failure.rel_path.display(), failure.reason))
        .collect()
}

// ============================================================================
// PDF report
// ============================================================================

/// Format the outcome of one framework's PDF run.
pub fn format_pdf_outcome(framework: &str, outcome: &PdfOutcome) -> Vec<String> {
    match outcome {
        PdfOutcome::Written {
            pdf_path,
            bytes,
            pages,
            skipped,
        } => {
            let mut lines = vec![
                format!("PDF created: {}", pdf_path.display()),
                format!("    Size: {}", format_size_mb(*bytes)),
                format!("    Pages: {pages}"),
            ];
            lines.extend(skipped_lines(skipped));
            lines
        }
        PdfOutcome::NoPages => vec![format!("{framework}: no pages found, nothing to do")],
        PdfOutcome::Cancelled => vec![format!("{framework}: cancelled")],
        PdfOutcome::Failed {
            combined_path,
            reason,
        } => vec![
            format!("Error creating PDF for {framework}: {reason}"),
            format!(
                "    Combined markdown retained at {}",
                combined_path.display()
            ),
        ],
    }
}

pub fn print_pdf_outcome(framework: &str, outcome: &PdfOutcome) {
    for line in format_pdf_outcome(framework, outcome) {
        println!("{}", line);
    }
}

// ============================================================================
// HTML site report
// ============================================================================

/// Format the site build report: one line per framework plus totals.
pub fn format_site_summary(summary: &SiteSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for framework in &summary.frameworks {
        lines.push(format!(
            "{} ({} pages) \u{2192} {}/index.html",
            framework.name,
            framework.page_count(),
            framework.name
        ));
        lines.extend(skipped_lines(&framework.failed));
    }
    lines.push(format!(
        "Generated {} frameworks, {} pages",
        summary.frameworks.len(),
        summary.total_pages()
    ));
    lines.push(format!("Open {}", summary.index_path.display()));
    lines
}

pub fn print_site_summary(summary: &SiteSummary) {
    for line in format_site_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Framework inventory
// ============================================================================

/// Format the `list` inventory: name, configured title, page count.
pub fn format_framework_list(listings: &[FrameworkListing]) -> Vec<String> {
    if listings.is_empty() {
        return vec!["No frameworks found".to_string()];
    }
    let mut lines = Vec::new();
    for listing in listings {
        lines.push(format!(
            "{} ({} pages)",
            listing.name, listing.pages
        ));
        lines.push(format!("    {}", listing.config.title));
    }
    lines
}

pub fn print_framework_list(listings: &[FrameworkListing]) {
    for line in format_framework_list(listings) {
        println!("{}", line);
    }
}
