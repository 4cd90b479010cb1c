//! Full preview document assembly.
//!
//! Composes the renderer output with header and section templates into a
//! standalone HTML document. Thin templating only; the interesting work
//! happens in the markdown passes.

use std::sync::LazyLock;

use readmelint_ast::ParsedReadme;
use regex::Regex;

use crate::escape::escape_html;
use crate::markdown::{RenderOptions, render};
use crate::paragraphs::wrap_paragraphs;

static SUB_ITEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=\s+(.+?)\s+=$").expect("valid regex"));

/// Renders a parsed readme into a complete preview document.
pub fn render_preview(readme: &ParsedReadme, options: &RenderOptions) -> String {
    let name = if readme.header.plugin_name.is_empty() {
        "Untitled plugin"
    } else {
        &readme.header.plugin_name
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(name)));
    html.push_str("</head>\n<body class=\"readme-preview\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(name)));

    if !readme.header.short_description.is_empty() {
        html.push_str(&format!(
            "<p class=\"short-description\">{}</p>\n",
            escape_html(&readme.header.short_description)
        ));
    }

    html.push_str(&meta_table(readme));

    for section in &readme.sections {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        let fragment = render(&section.content, options);
        // Promote `= Sub Item =` lines (FAQ questions, changelog versions).
        // They pass through the markdown passes untouched, so this runs on
        // the rendered fragment where the escaping pre-pass cannot eat the
        // generated tags.
        let fragment = SUB_ITEM_LINE.replace_all(&fragment, "<h4>$1</h4>");
        html.push_str(&wrap_paragraphs(&fragment));
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn meta_table(readme: &ParsedReadme) -> String {
    let header = &readme.header;
    let rows: Vec<(&str, String)> = vec![
        ("Contributors", header.contributors.join(", ")),
        ("Donate link", header.donate_link.clone()),
        ("Tags", header.tags.join(", ")),
        ("Requires at least", header.requires_at_least.clone()),
        ("Tested up to", header.tested_up_to.clone()),
        ("Stable tag", header.stable_tag.clone()),
        ("Requires PHP", header.requires_php.clone()),
        ("License", header.license.clone()),
        ("License URI", header.license_uri.clone()),
    ];

    let body: String = rows
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| {
            format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                escape_html(label),
                escape_html(value)
            )
        })
        .collect();

    if body.is_empty() {
        String::new()
    } else {
        format!("<table class=\"plugin-meta\">\n{body}</table>\n")
    }
}
