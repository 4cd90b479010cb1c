//! Structural heading and markdown-integrity heuristics.
//!
//! These scans run over the raw text, independent of section parsing, so
//! they can fire on malformed headings the structural parser silently
//! absorbed as body text.

use std::sync::LazyLock;

use readmelint_ast::{Diagnostic, ParsedReadme};
use regex::Regex;

static UNCLOSED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*$").expect("valid regex"));

// 1-6 hashes followed by anything but another hash, so `##Title` counts
// but a 7+ run or a bare hash line does not (the fixer draws the same line).
static HASH_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}[^#]").expect("valid regex"));

/// Every raw line that starts with `=` after trimming must be one of the
/// three canonical heading shapes; anything else is an error with a
/// computed rewrite suggestion.
pub fn check_heading_integrity(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    use readmelint_parser::patterns::{PLUGIN_NAME, SECTION, SUB_ITEM};

    for (index, line) in readme.raw.lines().enumerate() {
        let trimmed = line.trim();
        if !trimmed.starts_with('=') {
            continue;
        }
        if PLUGIN_NAME.is_match(trimmed) || SECTION.is_match(trimmed) || SUB_ITEM.is_match(trimmed)
        {
            continue;
        }

        let mut diagnostic = Diagnostic::new(
            "heading-syntax",
            format!("Malformed heading: \"{trimmed}\""),
        )
        .with_line(index as u32 + 1)
        .with_columns(1, line.chars().count() as u32 + 1);

        if let Some(suggestion) = rewrap_heading(trimmed) {
            diagnostic = diagnostic.with_suggestion(suggestion);
        }
        diagnostics.push(diagnostic);
    }
}

/// Re-wraps the de-equals-stripped core text using 1..=3 `=` based on
/// whichever side had more. Returns `None` when nothing but `=` remains.
fn rewrap_heading(trimmed: &str) -> Option<String> {
    let left = trimmed.chars().take_while(|c| *c == '=').count();
    let stripped = &trimmed[left..];
    let right = stripped.chars().rev().take_while(|c| *c == '=').count();
    let core = stripped[..stripped.len() - right].trim();

    if core.is_empty() {
        return None;
    }
    let markers = "=".repeat(left.max(right).clamp(1, 3));
    Some(format!("{markers} {core} {markers}"))
}

/// Heuristic scan for broken markdown: unclosed fences, stray hash
/// headings, unbalanced emphasis markers, unclosed links, and mixed
/// indentation inside code blocks.
pub fn check_markdown_integrity(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    let text = &readme.raw;

    check_fences_and_hash_headings(text, diagnostics);
    check_emphasis_balance(text, diagnostics);
    check_links(text, diagnostics);
    check_code_block_indentation(text, diagnostics);
}

fn check_fences_and_hash_headings(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    let mut in_fence = false;
    let mut last_open_line = 0u32;

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            if !in_fence {
                last_open_line = index as u32 + 1;
            }
            in_fence = !in_fence;
            continue;
        }
        if !in_fence && HASH_HEADING.is_match(trimmed) {
            diagnostics.push(
                Diagnostic::warning(
                    "markdown-integrity",
                    "Hash headings are not rendered; use = Heading = syntax",
                )
                .with_line(index as u32 + 1),
            );
        }
    }

    if in_fence {
        diagnostics.push(
            Diagnostic::warning("markdown-integrity", "Unclosed code fence")
                .with_line(last_open_line),
        );
    }
}

fn check_emphasis_balance(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    let double_count = text.matches("**").count();
    if double_count % 2 != 0 {
        diagnostics.push(Diagnostic::warning(
            "markdown-integrity",
            "Unbalanced bold markers",
        ));
    }

    let single_count = text.replace("**", "").matches('*').count();
    if single_count % 2 != 0 {
        diagnostics.push(Diagnostic::warning(
            "markdown-integrity",
            "Unbalanced italic markers",
        ));
    }
}

fn check_links(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in text.lines().enumerate() {
        let line_number = index as u32 + 1;

        if UNCLOSED_LINK.is_match(line) {
            diagnostics.push(
                Diagnostic::warning("markdown-integrity", "Possible unclosed link")
                    .with_line(line_number),
            );
            continue;
        }

        // A `[` with no `]` anywhere after it on the line.
        if let Some(bracket) = line.rfind('[') {
            if !line[bracket..].contains(']') {
                diagnostics.push(
                    Diagnostic::warning("markdown-integrity", "Unterminated \"[\" in line")
                        .with_line(line_number),
                );
            }
        }
    }
}

/// Flags mixed tab/space leading indentation inside fenced or
/// 4-space-indented code blocks, naming the block's first line.
fn check_code_block_indentation(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    let lines: Vec<&str> = text.lines().collect();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if line.trim().starts_with("```") {
            let block_start = index as u32 + 1;
            let mut interior = Vec::new();
            index += 1;
            while index < lines.len() && !lines[index].trim().starts_with("```") {
                interior.push(lines[index]);
                index += 1;
            }
            index += 1; // closing fence (or end of input)
            report_mixed_indent(&interior, block_start, diagnostics);
            continue;
        }

        if is_indented_code(line) {
            let block_start = index as u32 + 1;
            let mut interior = Vec::new();
            while index < lines.len() && is_indented_code(lines[index]) {
                interior.push(lines[index]);
                index += 1;
            }
            report_mixed_indent(&interior, block_start, diagnostics);
            continue;
        }

        index += 1;
    }
}

fn is_indented_code(line: &str) -> bool {
    !line.trim().is_empty() && (line.starts_with("    ") || line.starts_with('\t'))
}

fn report_mixed_indent(interior: &[&str], block_start: u32, diagnostics: &mut Vec<Diagnostic>) {
    let mut has_tabs = false;
    let mut has_spaces = false;

    for line in interior {
        for c in line.chars().take_while(|c| c.is_whitespace()) {
            match c {
                '\t' => has_tabs = true,
                ' ' => has_spaces = true,
                _ => {}
            }
        }
    }

    if has_tabs && has_spaces {
        diagnostics.push(
            Diagnostic::warning(
                "markdown-integrity",
                format!("Code block starting at line {block_start} mixes tab and space indentation"),
            )
            .with_line(block_start),
        );
    }
}
