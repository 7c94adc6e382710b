//! Combined-PDF assembly.
//!
//! For one framework: discover pages, concatenate a generated title page
//! plus every normalized page into a single combined Markdown document,
//! then hand it to the external typesetter (pandoc with the xelatex
//! engine). The combined document is transient — deleted once the PDF is
//! written, retained for inspection when typesetting fails.
//!
//! Everything that can go wrong mid-framework is a [`PdfOutcome`], not an
//! error: a framework with no pages, an operator declining an oversized
//! job, and a typesetter failure all leave sibling frameworks untouched.
//! Only infrastructure I/O (creating the output directory, writing the
//! combined document) propagates as [`PdfError`].

use crate::config::FrameworkConfig;
use crate::content;
use crate::discover::{self, Page};
use crate::types::{Layout, PageFailure};
use chrono::Local;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Hard wall-clock ceiling on one typesetter run.
pub const TYPESET_TIMEOUT: Duration = Duration::from_secs(600);

/// Interval between child-process liveness polls.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const PROGRESS_EVERY: usize = 100;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("discovery error: {0}")]
    Discover(#[from] discover::DiscoverError),
}

/// Why a typesetter invocation produced no PDF.
#[derive(Error, Debug)]
pub enum TypesetError {
    #[error("failed to run typesetter: {0}")]
    Io(#[from] std::io::Error),
    #[error("typesetter exited with {status}\n{stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("typesetter exceeded the {} second ceiling", .limit.as_secs())]
    Timeout { limit: Duration },
}

/// Settings for one PDF run.
///
/// `program` and `timeout` are fields rather than CLI flags so the
/// invocation layer can be exercised in tests without pandoc installed.
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Typesetter binary.
    pub program: PathBuf,
    /// Author recorded in the combined document's front matter.
    pub author: String,
    /// Inclusion cap: include only the first N pages in discovery order.
    pub max_pages: Option<usize>,
    /// Wall-clock ceiling for the typesetter run.
    pub timeout: Duration,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pandoc"),
            author: "Apple Inc.".to_string(),
            max_pages: None,
            timeout: TYPESET_TIMEOUT,
        }
    }
}

/// Result of one framework's PDF run.
#[derive(Debug)]
pub enum PdfOutcome {
    /// The PDF was written and the combined document deleted.
    Written {
        pdf_path: PathBuf,
        bytes: u64,
        pages: usize,
        skipped: Vec<PageFailure>,
    },
    /// No Markdown files were found for the framework.
    NoPages,
    /// The operator declined an oversized job. Clean abort, nothing written.
    Cancelled,
    /// The typesetter failed or timed out; the combined document is
    /// retained at `combined_path` for inspection.
    Failed {
        combined_path: PathBuf,
        reason: TypesetError,
    },
}

/// Convert one framework to a combined PDF using its configured settings.
///
/// `confirm` is the oversized-job gate: called with a prompt when the page
/// count exceeds the recommendation and no cap was given; returning false
/// aborts the framework cleanly.
pub fn convert_framework(
    layout: &Layout,
    framework: &str,
    opts: &PdfOptions,
    confirm: impl FnMut(&str) -> bool,
) -> Result<PdfOutcome, PdfError> {
    let config = crate::config::lookup(framework);
    convert_with_config(layout, framework, &config, opts, confirm)
}

/// [`convert_framework`] with an explicit configuration.
pub fn convert_with_config(
    layout: &Layout,
    framework: &str,
    config: &FrameworkConfig,
    opts: &PdfOptions,
    mut confirm: impl FnMut(&str) -> bool,
) -> Result<PdfOutcome, PdfError> {
    let pages = discover::discover_pages(&layout.markdown_dir, framework)?;
    if pages.is_empty() {
        println!("Warning: no markdown files found for {framework}");
        return Ok(PdfOutcome::NoPages);
    }

    let total = pages.len();
    println!("Found {total} markdown files");

    let included: &[Page] = match opts.max_pages {
        None => {
            if total > config.recommended_max {
                println!();
                println!("Warning: {total} pages is quite large!");
                println!(
                    "  Recommended: {} pages for a manageable PDF",
                    config.recommended_max
                );
                println!(
                    "  Use --max-pages {} for the recommended size,",
                    config.recommended_max
                );
                println!("  or --max-pages {total} to include everything (may be very large).");
                let prompt = format!("\nProceed with ALL {total} pages? (y/N): ");
                if !confirm(&prompt) {
                    println!("Cancelled. Rerun with --max-pages to set a limit.");
                    return Ok(PdfOutcome::Cancelled);
                }
            }
            &pages
        }
        Some(cap) => {
            let take = cap.min(total);
            println!("Limiting to first {take} of {total} pages");
            if cap < config.recommended_max && total > config.recommended_max {
                println!(
                    "Tip: recommended size for this framework is {} pages",
                    config.recommended_max
                );
            }
            &pages[..take]
        }
    };

    println!("Processing {} pages...", included.len());
    let date = Local::now().format("%Y-%m-%d").to_string();
    let mut combined = title_block(config, &opts.author, &date);
    let mut skipped = Vec::new();
    for (i, page) in included.iter().enumerate() {
        if (i + 1) % PROGRESS_EVERY == 0 {
            println!("  Processed {}/{} pages...", i + 1, included.len());
        }
        match fs::read_to_string(&page.path) {
            Ok(raw) => combined.push_str(&page_section(&page.rel_path, &raw)),
            Err(err) => {
                println!("  Warning: skipping {}: {err}", page.rel_path.display());
                skipped.push(PageFailure {
                    rel_path: page.rel_path.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    fs::create_dir_all(&layout.pdf_dir)?;
    let combined_path = layout.pdf_dir.join(format!("{framework}_combined.md"));
    fs::write(&combined_path, &combined)?;
    println!("Combined markdown saved to {}", combined_path.display());

    let pdf_path = layout.pdf_dir.join(format!("{framework}_documentation.pdf"));
    println!("Generating {} (this may take several minutes)", pdf_path.display());

    match typeset(&opts.program, &combined_path, &pdf_path, opts.timeout) {
        Ok(()) => {
            let bytes = fs::metadata(&pdf_path).map(|meta| meta.len()).unwrap_or(0);
            fs::remove_file(&combined_path)?;
            Ok(PdfOutcome::Written {
                pdf_path,
                bytes,
                pages: included.len() - skipped.len(),
                skipped,
            })
        }
        Err(reason) => Ok(PdfOutcome::Failed {
            combined_path,
            reason,
        }),
    }
}

/// Front matter and centered title page for the combined document.
///
/// The front matter carries the table-of-contents directives the
/// typesetter consumes (`toc`, depth 2).
pub fn title_block(config: &FrameworkConfig, author: &str, date: &str) -> String {
    format!(
        r#"---
title: "{title}"
subtitle: "{subtitle}"
author: "{author}"
date: "{date}"
toc: true
toc-depth: 2
---

\begin{{center}}
\Huge {title}

\vspace{{0.5cm}}

\Large {subtitle}

\vspace{{1cm}}

\normalsize {author}

{date}
\end{{center}}

---

\newpage

"#,
        title = config.title,
        subtitle = config.subtitle,
    )
}

/// One page's contribution to the combined document: a page break, a
/// source-path comment, and the normalized body.
pub fn page_section(rel_path: &Path, raw: &str) -> String {
    format!(
        "\n\\newpage\n\n<!-- File: {} -->\n\n{}\n\n",
        rel_path.display(),
        content::normalized_body(raw)
    )
}

/// Run the typesetter over a combined document.
pub fn typeset(
    program: &Path,
    input: &Path,
    output: &Path,
    timeout: Duration,
) -> Result<(), TypesetError> {
    let mut command = Command::new(program);
    command
        .arg(input)
        .arg("-o")
        .arg(output)
        .args([
            "--pdf-engine=xelatex",
            "--toc",
            "--toc-depth=2",
            "--highlight-style=tango",
            "--number-sections",
        ])
        .args(["-V", "geometry:margin=1in"])
        .args(["-V", "fontsize=10pt"])
        .args(["-V", "colorlinks=true"])
        .args(["-V", "linkcolor=blue"])
        .args(["-V", "urlcolor=blue"]);
    run_with_timeout(command, timeout)
}

/// Run a command to completion with a hard wall-clock ceiling.
///
/// Stderr is drained on a separate thread so a chatty child cannot fill
/// the pipe and stall; on timeout the child is killed and reaped.
pub fn run_with_timeout(mut command: Command, timeout: Duration) -> Result<(), TypesetError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    let mut child = command.spawn()?;
    let mut stderr = child.stderr.take().expect("stderr was piped");
    let reader = std::thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr.read_to_string(&mut buf);
        buf
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                // The reader thread is not joined: surviving grandchildren
                // can hold the pipe open past the kill.
                return Err(TypesetError::Timeout { limit: timeout });
            }
            None => std::thread::sleep(POLL_INTERVAL),
        }
    };

    let stderr_text = reader.join().unwrap_or_default();
    if status.success() {
        Ok(())
    } else {
        Err(TypesetError::Failed {
            status,
            stderr: stderr_text,
        })
    }
}

/// True when the typesetter responds to `--version`.
pub fn typesetter_available(program: &Path) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Installation guidance for the host platform.
pub fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "brew install pandoc basictex"
    } else if cfg!(target_os = "windows") {
        "choco install pandoc miktex"
    } else {
        "sudo apt-get install pandoc texlive-xetex"
    }
}
