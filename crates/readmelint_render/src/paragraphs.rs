//! Paragraph assembly: wraps rendered fragments in `<p>` tags.

/// Block-level tag prefixes that must not be wrapped in a paragraph.
const BLOCK_TAGS: &[&str] = &["<div", "<blockquote", "<ul", "<ol", "<pre", "<h"];

/// Splits an HTML fragment on blank-line-delimited blocks and wraps each
/// non-block-level block in `<p>`, converting interior newlines to `<br>`.
///
/// Called by the preview assembler, not by `render` itself, so hosts can
/// choose their own block layout.
pub fn wrap_paragraphs(html: &str) -> String {
    html.split("\n\n")
        .filter_map(|block| {
            let trimmed = block.trim();
            if trimmed.is_empty() {
                return None;
            }
            if BLOCK_TAGS.iter().any(|tag| trimmed.starts_with(tag)) {
                Some(trimmed.to_string())
            } else {
                Some(format!("<p>{}</p>", trimmed.replace('\n', "<br>")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
