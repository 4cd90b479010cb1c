//! The WordPress Markdown subset renderer.
//!
//! Pass order is load-bearing: later passes assume the output shapes of
//! earlier ones (bold before italic, code before both, line-level passes
//! before the multiline fence pass). The line-level passes skip lines inside
//! fenced code so the fence pass receives raw code text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::{escape_angle_brackets, escape_html};
use crate::video;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Replace whole-line video URLs with embed blocks.
    pub allow_videos: bool,
    /// Pass raw HTML through unchanged. When false, `<` and `>` in source
    /// lines are escaped before any pass runs.
    pub allow_html: bool,
    /// Base URL prefixed to relative link targets.
    pub base_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            allow_videos: true,
            allow_html: false,
            base_url: None,
        }
    }
}

static FENCE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[^\n]*\n(.*?)```").expect("valid regex"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#).expect("valid regex")
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("valid regex"));

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s+(.*)$").expect("valid regex"));

/// Renders WordPress-flavored Markdown to an HTML fragment.
///
/// The output is line-oriented; callers that need paragraph tags compose
/// this with [`crate::wrap_paragraphs`].
pub fn render(text: &str, options: &RenderOptions) -> String {
    let lines: Vec<String> = text.lines().map(String::from).collect();

    let lines = line_pass(lines, options);
    let lines = blockquote_pass(lines);
    let lines = list_pass(lines);

    let joined = lines.join("\n");
    let joined = fence_pass(&joined);
    let joined = link_pass(&joined, options);
    let joined = inline_code_pass(&joined, options);
    let joined = BOLD.replace_all(&joined, "<strong>$1</strong>").into_owned();
    ITALIC.replace_all(&joined, "<em>$1</em>").into_owned()
}

fn is_fence_marker(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Trim, video embeds, HTML escaping, and H3-H6 headings, per line.
///
/// H1/H2 hashes are deliberately not converted: section titles own those
/// levels, and stray hash headings are a validator warning instead.
fn line_pass(lines: Vec<String>, options: &RenderOptions) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut in_fence = false;

    for line in lines {
        if is_fence_marker(&line) {
            in_fence = !in_fence;
            out.push(line.trim().to_string());
            continue;
        }
        if in_fence {
            out.push(line);
            continue;
        }

        let trimmed = line.trim();

        if options.allow_videos {
            if let Some(embed) = video::embed_for_line(trimmed) {
                out.push(embed);
                continue;
            }
        }

        let text = if options.allow_html {
            trimmed.to_string()
        } else {
            escape_angle_brackets(trimmed)
        };

        out.push(heading_line(text));
    }

    out
}

fn heading_line(line: String) -> String {
    const LEVELS: &[(&str, &str)] = &[
        ("###### ", "h6"),
        ("##### ", "h5"),
        ("#### ", "h4"),
        ("### ", "h3"),
    ];
    for (prefix, tag) in LEVELS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return format!("<{tag}>{}</{tag}>", rest.trim());
        }
    }
    line
}

/// Consecutive `> ` lines become one blockquote, joined by `<br>`.
fn blockquote_pass(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut quoted: Vec<String> = Vec::new();
    let mut in_fence = false;

    let flush = |quoted: &mut Vec<String>, out: &mut Vec<String>| {
        if !quoted.is_empty() {
            out.push(format!("<blockquote>{}</blockquote>", quoted.join("<br>")));
            quoted.clear();
        }
    };

    for line in lines {
        if is_fence_marker(&line) {
            flush(&mut quoted, &mut out);
            in_fence = !in_fence;
            out.push(line);
            continue;
        }
        if in_fence {
            out.push(line);
            continue;
        }

        // The escaping pre-pass may already have rewritten the marker.
        if let Some(rest) = line.strip_prefix("> ").or_else(|| line.strip_prefix("&gt; ")) {
            quoted.push(rest.to_string());
        } else {
            flush(&mut quoted, &mut out);
            out.push(line);
        }
    }
    flush(&mut quoted, &mut out);

    out
}

#[derive(PartialEq, Clone, Copy)]
enum ListKind {
    Ordered,
    Unordered,
}

/// Consecutive list lines become one `<ol>`/`<ul>`; switching kind within a
/// run closes the first list and opens the second.
fn list_pass(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut items: Vec<String> = Vec::new();
    let mut kind: Option<ListKind> = None;
    let mut in_fence = false;

    let flush = |items: &mut Vec<String>, kind: &mut Option<ListKind>, out: &mut Vec<String>| {
        if let Some(k) = kind.take() {
            let tag = match k {
                ListKind::Ordered => "ol",
                ListKind::Unordered => "ul",
            };
            let body: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            out.push(format!("<{tag}>{body}</{tag}>"));
            items.clear();
        }
    };

    for line in lines {
        if is_fence_marker(&line) {
            flush(&mut items, &mut kind, &mut out);
            in_fence = !in_fence;
            out.push(line);
            continue;
        }
        if in_fence {
            out.push(line);
            continue;
        }

        let item = ORDERED_ITEM
            .captures(&line)
            .map(|c| (ListKind::Ordered, c[1].to_string()))
            .or_else(|| {
                UNORDERED_ITEM
                    .captures(&line)
                    .map(|c| (ListKind::Unordered, c[1].to_string()))
            });

        match item {
            Some((k, text)) => {
                if kind.is_some() && kind != Some(k) {
                    flush(&mut items, &mut kind, &mut out);
                }
                kind = Some(k);
                items.push(text);
            }
            None => {
                flush(&mut items, &mut kind, &mut out);
                out.push(line);
            }
        }
    }
    flush(&mut items, &mut kind, &mut out);

    out
}

/// Paired ``` markers become `<pre><code>` with the inner text escaped.
fn fence_pass(text: &str) -> String {
    FENCE_BLOCK
        .replace_all(text, |caps: &Captures| {
            format!("<pre><code>{}</code></pre>", escape_html(caps[1].trim()))
        })
        .into_owned()
}

/// Inline `[text](url "title")` links. Reference-style links are left as
/// literal text.
fn link_pass(text: &str, options: &RenderOptions) -> String {
    LINK.replace_all(text, |caps: &Captures| {
        let label = if options.allow_html {
            escape_html(&caps[1])
        } else {
            // Already escaped by the pre-pass.
            caps[1].to_string()
        };
        let url = resolve_url(&caps[2], options);
        match caps.get(3) {
            Some(title) => format!(
                "<a href=\"{}\" title=\"{}\">{}</a>",
                escape_html(&url),
                escape_html(title.as_str()),
                label
            ),
            None => format!("<a href=\"{}\">{}</a>", escape_html(&url), label),
        }
    })
    .into_owned()
}

fn resolve_url(url: &str, options: &RenderOptions) -> String {
    let absolute = url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with('#')
        || url.starts_with("mailto:");
    match (&options.base_url, absolute) {
        (Some(base), false) => format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/')),
        _ => url.to_string(),
    }
}

fn inline_code_pass(text: &str, options: &RenderOptions) -> String {
    INLINE_CODE
        .replace_all(text, |caps: &Captures| {
            let inner = if options.allow_html {
                escape_html(&caps[1])
            } else {
                // Angle brackets were escaped by the pre-pass.
                caps[1].to_string()
            };
            format!("<code>{inner}</code>")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_default(text: &str) -> String {
        render(text, &RenderOptions::default())
    }

    #[test]
    fn bold_renders_strong() {
        assert_eq!(render_default("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn italic_renders_em() {
        assert_eq!(render_default("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(
            render_default("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn unbalanced_bold_still_produces_output() {
        // Best-effort: the validator flags unbalanced markers separately.
        let html = render_default("**text*");
        assert!(html.contains("text"));
    }

    #[test]
    fn inline_code_escapes_angle_brackets() {
        let html = render_default("`<?php echo 1; ?>`");
        assert_eq!(html, "<code>&lt;?php echo 1; ?&gt;</code>");
    }

    #[test]
    fn headings_h3_to_h6() {
        assert_eq!(render_default("### Three"), "<h3>Three</h3>");
        assert_eq!(render_default("#### Four"), "<h4>Four</h4>");
        assert_eq!(render_default("##### Five"), "<h5>Five</h5>");
        assert_eq!(render_default("###### Six"), "<h6>Six</h6>");
    }

    #[test]
    fn h1_and_h2_hashes_are_not_converted() {
        assert_eq!(render_default("# One"), "# One");
        assert_eq!(render_default("## Two"), "## Two");
    }

    #[test]
    fn blockquote_groups_consecutive_lines() {
        assert_eq!(
            render_default("> first\n> second\nafter"),
            "<blockquote>first<br>second</blockquote>\nafter"
        );
    }

    #[test]
    fn blockquote_state_resets_at_end_of_input() {
        assert_eq!(render_default("> only"), "<blockquote>only</blockquote>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render_default("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn unordered_list_star_and_dash() {
        assert_eq!(
            render_default("* one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn switching_list_kind_closes_first_list() {
        assert_eq!(
            render_default("1. one\n* bullet"),
            "<ol><li>one</li></ol>\n<ul><li>bullet</li></ul>"
        );
    }

    #[test]
    fn fenced_code_block() {
        let html = render_default("```\nlet x = 1 < 2;\n```");
        assert_eq!(html, "<pre><code>let x = 1 &lt; 2;</code></pre>");
    }

    #[test]
    fn fence_language_tag_is_dropped() {
        let html = render_default("```php\necho 'hi';\n```");
        assert!(html.starts_with("<pre><code>"));
        assert!(!html.contains("php"));
    }

    #[test]
    fn list_syntax_inside_fence_is_not_a_list() {
        let html = render_default("```\n* not a bullet\n```");
        assert!(html.contains("* not a bullet"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn inline_link() {
        assert_eq!(
            render_default("[site](https://example.com)"),
            "<a href=\"https://example.com\">site</a>"
        );
    }

    #[test]
    fn link_with_title() {
        assert_eq!(
            render_default("[site](https://example.com \"My Site\")"),
            "<a href=\"https://example.com\" title=\"My Site\">site</a>"
        );
    }

    #[test]
    fn reference_links_stay_literal() {
        let html = render_default("[text][ref]");
        assert_eq!(html, "[text][ref]");
    }

    #[test]
    fn relative_link_uses_base_url() {
        let options = RenderOptions {
            base_url: Some("https://example.com/assets".to_string()),
            ..RenderOptions::default()
        };
        assert_eq!(
            render("[shot](screenshot-1.png)", &options),
            "<a href=\"https://example.com/assets/screenshot-1.png\">shot</a>"
        );
    }

    #[test]
    fn raw_html_is_escaped_by_default() {
        assert_eq!(render_default("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn raw_html_passes_through_when_allowed() {
        let options = RenderOptions {
            allow_html: true,
            ..RenderOptions::default()
        };
        assert_eq!(render("<b>hi</b>", &options), "<b>hi</b>");
    }

    #[test]
    fn video_line_becomes_iframe() {
        let html = render_default("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(html.contains("<iframe"));
        assert!(html.contains("youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn video_disabled_leaves_url_as_text() {
        let options = RenderOptions {
            allow_videos: false,
            ..RenderOptions::default()
        };
        let html = render("https://vimeo.com/123456", &options);
        assert!(!html.contains("<iframe"));
        assert!(html.contains("https://vimeo.com/123456"));
    }

    #[test]
    fn blockquote_after_escaping_still_matches() {
        // The escaping pre-pass must not hide the quote marker.
        let html = render_default("> quoted <text>");
        assert_eq!(html, "<blockquote>quoted &lt;text&gt;</blockquote>");
    }
}
