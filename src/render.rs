//! Markdown to HTML rendering.
//!
//! Thin layer over `pulldown-cmark` with the GFM feature set (tables,
//! strikethrough, task lists). Two things the stock HTML writer does not do
//! are handled here:
//!
//! - headings are rewritten to carry slugified anchor ids, and
//! - a table of contents is collected from the heading sequence so page
//!   templates can render a "Contents" block.
//!
//! Fenced code blocks come out as `<pre><code class="language-…">`, which
//! the embedded stylesheet targets.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

/// One heading in a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text with inline markup flattened.
    pub title: String,
    /// Anchor id carried by the rendered heading.
    pub id: String,
}

/// A rendered page body plus its table of contents.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render normalized Markdown to HTML, collecting the table of contents.
pub fn render_markdown(body: &str) -> Rendered {
    let parser = Parser::new_ext(body, parser_options());

    let mut events: Vec<Event> = Vec::new();
    let mut toc: Vec<TocEntry> = Vec::new();
    let mut slugs: HashMap<String, usize> = HashMap::new();
    // (level, accumulated text, index of the placeholder start tag)
    let mut heading: Option<(u8, String, usize)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_level_num(level), String::new(), events.len()));
                events.push(Event::Html("".into()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title, at)) = heading.take() {
                    let id = unique_slug(&title, &mut slugs);
                    events[at] = Event::Html(format!("<h{level} id=\"{id}\">").into());
                    events.push(Event::Html(format!("</h{level}>").into()));
                    toc.push(TocEntry { level, title, id });
                }
            }
            other => {
                if let Some((_, title, _)) = heading.as_mut() {
                    match &other {
                        Event::Text(text) | Event::Code(text) => title.push_str(text),
                        _ => {}
                    }
                }
                events.push(other);
            }
        }
    }

    let mut out = String::with_capacity(body.len() * 2);
    html::push_html(&mut out, events.into_iter());
    Rendered { html: out, toc }
}

fn heading_level_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Slugify heading text for use as an anchor id.
///
/// ASCII alphanumerics are lowercased; runs of whitespace, dashes, and
/// underscores collapse to a single dash; everything else is dropped.
fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = true; // prevents a leading dash
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            slug.push('-');
            last_was_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Slugify with duplicate suffixing: repeated headings get `-1`, `-2`, …
fn unique_slug(text: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = slugify(text);
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };
    match seen.get_mut(&base) {
        Some(count) => {
            *count += 1;
            format!("{base}-{count}")
        }
        None => {
            seen.insert(base.clone(), 0);
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_carry_anchor_ids() {
        let rendered = render_markdown("# First Steps\n\ntext\n\n## Going Deeper\n");
        assert!(rendered.html.contains(r#"<h1 id="first-steps">First Steps</h1>"#));
        assert!(rendered.html.contains(r#"<h2 id="going-deeper">Going Deeper</h2>"#));
    }

    #[test]
    fn toc_collects_levels_titles_and_ids() {
        let rendered = render_markdown("# One\n\n## Two\n\n### Three\n");
        let toc = &rendered.toc;
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0], TocEntry { level: 1, title: "One".into(), id: "one".into() });
        assert_eq!(toc[1].level, 2);
        assert_eq!(toc[2].id, "three");
    }

    #[test]
    fn duplicate_headings_get_suffixed_ids() {
        let rendered = render_markdown("## Usage\n\n## Usage\n\n## Usage\n");
        let ids: Vec<&str> = rendered.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);
    }

    #[test]
    fn heading_with_inline_code_flattens_text() {
        let rendered = render_markdown("## The `map` operator\n");
        assert_eq!(rendered.toc[0].title, "The map operator");
        assert_eq!(rendered.toc[0].id, "the-map-operator");
        // Inline markup still renders inside the heading element.
        assert!(rendered.html.contains("<code>map</code>"));
    }

    #[test]
    fn fenced_code_block_keeps_language_class() {
        let rendered = render_markdown("```swift\nlet x = 1\n```\n");
        assert!(rendered.html.contains(r#"<code class="language-swift">"#));
    }

    #[test]
    fn tables_render() {
        let rendered = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(rendered.html.contains("<table>"));
        assert!(rendered.html.contains("<td>1</td>"));
    }

    #[test]
    fn page_without_headings_has_empty_toc() {
        let rendered = render_markdown("Just a paragraph.\n");
        assert!(rendered.toc.is_empty());
        assert!(rendered.html.contains("<p>Just a paragraph.</p>"));
    }

    #[test]
    fn punctuation_only_heading_gets_fallback_slug() {
        let rendered = render_markdown("## !!!\n");
        assert_eq!(rendered.toc[0].id, "section");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello,  World - Again"), "hello-world-again");
        assert_eq!(slugify("  spaced  "), "spaced");
        assert_eq!(slugify("snake_case name"), "snake-case-name");
    }
}
