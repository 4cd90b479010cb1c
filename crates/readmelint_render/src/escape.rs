//! HTML escaping with the fixed 5-entity table.

/// Escapes `& < > " '` for safe embedding in HTML.
///
/// This is the only sanitization the renderer performs; anything beyond it
/// (CSP etc.) is the embedding host's concern.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes only `<` and `>`.
///
/// Used as the pre-pass when raw HTML is disallowed: ampersands and quotes
/// must survive so later passes (links, titles) still see their syntax.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
