//! # docpress
//!
//! A batch converter that turns a Markdown documentation archive into two
//! alternate presentation forms: one combined, table-of-contents'd PDF per
//! framework (typeset by pandoc), and a browsable static HTML site with
//! per-page templates, per-framework indexes, and a global landing page
//! with a client-side search filter.
//!
//! # Architecture: Two Pipelines, One Front End
//!
//! Both pipelines share discovery and normalization; they diverge at the
//! rendering step:
//!
//! ```text
//!                    markdown/<framework>/**/*.md
//!                               │
//!                    discover (order: depth, then path)
//!                               │
//!                    content (strip metadata block)
//!                        ┌──────┴──────┐
//!    pdf: title page + concatenate    site: render each page
//!         → pandoc → combined PDF          → maud templates → HTML tree
//! ```
//!
//! Processing is strictly sequential — one page is read, transformed, and
//! written before the next begins. Every per-page failure is caught at the
//! page boundary, logged, and skipped; every per-framework failure leaves
//! sibling frameworks untouched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Recursive page discovery with deterministic ordering |
//! | [`content`] | Leading metadata-block stripping, page titles |
//! | [`render`] | Markdown → HTML with anchor ids and a collected TOC |
//! | [`pdf`] | Combined-document assembly and the pandoc invocation |
//! | [`site`] | Maud page/index templates and site build orchestration |
//! | [`config`] | Static per-framework title/subtitle/threshold table |
//! | [`output`] | CLI report formatting (pure `format_*` + `print_*`) |
//! | [`types`] | Shared layout and per-page failure types |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship or get out of
//! sync — the stylesheets and the search filter script are embedded into
//! the binary with `include_str!`.
//!
//! ## Ordering Is a Pure Function of the File Set
//!
//! Pages sort by `(depth, lowercased relative path)`: root-level pages
//! first, ties broken case-insensitively. The order never depends on
//! filesystem enumeration order, so repeated builds on unchanged input are
//! byte-identical — including the combined PDF input and every index page.
//!
//! ## The Typesetter Is a Black Box With a Ceiling
//!
//! pandoc is the only external dependency, checked up front with
//! platform-specific installation guidance. Its run is bounded by a hard
//! 600-second ceiling; on failure or timeout the combined Markdown input
//! is retained next to where the PDF would have been, so the operator can
//! inspect exactly what the typesetter saw.

pub mod config;
pub mod content;
pub mod discover;
pub mod output;
pub mod pdf;
pub mod render;
pub mod site;
pub mod types;
