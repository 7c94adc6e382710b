//! Document content normalization.
//!
//! Source pages may open with a `---`-delimited metadata block. The combined
//! PDF and the HTML site both want only the body, so the block is stripped
//! before rendering. Detection is purely syntactic: the block's interior is
//! never parsed, and content that does not open with the delimiter passes
//! through untouched.

use std::path::Path;

/// Delimiter line that opens and closes a leading metadata block.
pub const METADATA_DELIMITER: &str = "---";

/// Strip a leading metadata block, returning the body.
///
/// A block is present when the content starts with the delimiter and
/// splitting on the delimiter yields a third part (everything after the
/// closing delimiter). The body is that third part, trimmed. In every other
/// case the content is returned unchanged.
pub fn normalized_body(content: &str) -> &str {
    if !content.starts_with(METADATA_DELIMITER) {
        return content;
    }
    let mut parts = content.splitn(3, METADATA_DELIMITER);
    // First part is the empty prefix before the opening delimiter.
    let (Some(_), Some(_), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
        return content;
    };
    body.trim()
}

/// Display title for a page: its relative path with the extension removed.
pub fn page_title(rel_path: &Path) -> String {
    rel_path.with_extension("").to_string_lossy().into_owned()
}
