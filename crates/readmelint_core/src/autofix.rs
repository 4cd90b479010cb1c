//! Heuristic auto-fix transformer.
//!
//! A single forward scan over lines, independent of the structural parser:
//! normalizes malformed `=` headings, restyles code fences, rewrites hash
//! headings, and collapses excessive blank lines. Every branch falls back
//! to leaving the line unchanged when a pattern does not fully match, so
//! the transformer never fails and running it twice does not re-break
//! already-fixed text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::MultiLineStyle;

static TRAILING_HASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#{1,6}\s*$").expect("valid regex"));

/// The rewritten text plus a human-readable log of every change applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutoFixResult {
    pub updated_text: String,
    pub changes: Vec<String>,
}

impl AutoFixResult {
    /// True when the transformer found nothing to rewrite.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Applies all heuristic fixes to `text`.
pub fn auto_fix(text: &str, style: MultiLineStyle) -> AutoFixResult {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut changes = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index];

        if line.trim().starts_with("```") {
            index = fix_fence(&lines, index, style, &mut out, &mut changes);
            continue;
        }
        if line.trim().starts_with('=') {
            out.push(fix_equals_heading(line, &mut changes));
        } else if line.starts_with('#') {
            out.push(fix_hash_heading(line, &mut changes));
        } else {
            out.push(line.to_string());
        }
        index += 1;
    }

    let out = collapse_blank_runs(out, &mut changes);
    debug!(changes = changes.len(), "auto-fix complete");

    AutoFixResult {
        updated_text: out.join("\n"),
        changes,
    }
}

/// Normalizes a `=`-wrapped heading. A 3/3 marker run is an intentional
/// plugin-name header and stays untouched; otherwise the core text is
/// re-wrapped with `==` if either run had two or more markers, `=` if not.
/// The same rule covers headings missing their closing run entirely.
fn fix_equals_heading(line: &str, changes: &mut Vec<String>) -> String {
    let trimmed = line.trim();
    let left = trimmed.chars().take_while(|c| *c == '=').count();
    let rest = &trimmed[left..];
    let right = rest.chars().rev().take_while(|c| *c == '=').count();
    let core = rest[..rest.len() - right].trim();

    if core.is_empty() || (left == 3 && right == 3) {
        return line.to_string();
    }

    let markers = if left >= 2 || right >= 2 { "==" } else { "=" };
    let fixed = format!("{markers} {core} {markers}");
    if fixed != line {
        changes.push(format!("normalized heading \"{trimmed}\" to \"{fixed}\""));
    }
    fixed
}

/// Rewrites a `#` heading as `== text ==` (H1/H2) or `= text =` (H3+),
/// stripping any trailing hash run and collapsing internal whitespace.
fn fix_hash_heading(line: &str, changes: &mut Vec<String>) -> String {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes > 6 {
        return line.to_string();
    }

    let rest = TRAILING_HASHES.replace(&line[hashes..], "");
    let core = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    if core.is_empty() {
        return line.to_string();
    }

    let fixed = if hashes <= 2 {
        format!("== {core} ==")
    } else {
        format!("= {core} =")
    };
    changes.push(format!("converted hash heading to \"{fixed}\""));
    fixed
}

/// Consumes one fenced code block starting at `start` and emits its
/// replacement. Returns the index of the first line after the block.
fn fix_fence(
    lines: &[&str],
    start: usize,
    style: MultiLineStyle,
    out: &mut Vec<String>,
    changes: &mut Vec<String>,
) -> usize {
    let opening = lines[start].trim();
    let lang = opening[3..].trim();

    let mut end = start + 1;
    while end < lines.len() && !lines[end].trim().starts_with("```") {
        end += 1;
    }
    let interior = &lines[start + 1..end];
    let next = if end < lines.len() { end + 1 } else { end };

    if interior.iter().all(|l| l.trim().is_empty()) {
        changes.push("removed empty code block".to_string());
        return next;
    }

    if interior.len() == 1 {
        let code = interior[0].trim().replace('`', "\\`");
        out.push(format!("`{code}`"));
        changes.push("converted single-line code block to inline code".to_string());
        return next;
    }

    match style {
        MultiLineStyle::Fenced => {
            let mut block = Vec::with_capacity(interior.len() + 2);
            block.push(format!("```{lang}"));
            block.extend(interior.iter().map(|l| expand_leading_tabs(l)));
            block.push("```".to_string());
            // The log must account for every rewrite, including tab
            // expansion and fence-line cleanup, or callers keying on
            // `is_unchanged` would drop the new text.
            if block
                .iter()
                .map(String::as_str)
                .ne(lines[start..next].iter().copied())
            {
                changes.push("normalized code block".to_string());
            }
            out.append(&mut block);
        }
        MultiLineStyle::Indented => {
            changes.push("converted fenced code block to indented code".to_string());
            if !lang.is_empty() {
                changes.push(format!("dropped code language tag \"{lang}\""));
            }
            for line in interior {
                if line.trim().is_empty() {
                    out.push(String::new());
                } else {
                    out.push(format!("    {}", line.trim_start()));
                }
            }
        }
    }
    next
}

fn expand_leading_tabs(line: &str) -> String {
    let indent_len = line
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum::<usize>();
    let indent: String = line[..indent_len]
        .chars()
        .map(|c| if c == '\t' { "    " } else { " " })
        .collect::<Vec<_>>()
        .join("");
    format!("{indent}{}", &line[indent_len..])
}

/// Collapses runs of 3+ blank lines down to exactly 2, logging a single
/// entry no matter how many runs were collapsed.
fn collapse_blank_runs(lines: Vec<String>, changes: &mut Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut blanks = 0;
    let mut collapsed = false;

    for line in lines {
        if line.trim().is_empty() {
            blanks += 1;
            if blanks <= 2 {
                out.push(line);
            } else {
                collapsed = true;
            }
        } else {
            blanks = 0;
            out.push(line);
        }
    }

    if collapsed {
        changes.push("collapsed excessive blank lines".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fix(text: &str) -> AutoFixResult {
        auto_fix(text, MultiLineStyle::Indented)
    }

    #[test]
    fn well_formed_text_is_untouched() {
        let text = "=== Name ===\n\n== Description ==\nBody text.\n";
        let result = fix(text);

        assert_eq!(result.updated_text, text);
        assert!(result.is_unchanged());
    }

    #[test]
    fn mismatched_heading_markers_are_normalized() {
        let result = fix("== Description =\n");
        assert_eq!(result.updated_text, "== Description ==\n");
        assert_eq!(result.changes.len(), 1);
    }

    #[test]
    fn missing_closing_run_is_synthesized() {
        assert_eq!(fix("== Title\n").updated_text, "== Title ==\n");
        assert_eq!(fix("= Title\n").updated_text, "= Title =\n");
    }

    #[test]
    fn plugin_name_heading_stays_untouched() {
        let result = fix("=== My Plugin ===\n");
        assert_eq!(result.updated_text, "=== My Plugin ===\n");
        assert!(result.is_unchanged());
    }

    #[test]
    fn hash_headings_convert_by_level() {
        assert_eq!(fix("# Title\n").updated_text, "== Title ==\n");
        assert_eq!(fix("## Title\n").updated_text, "== Title ==\n");
        assert_eq!(fix("### Title\n").updated_text, "= Title =\n");
        assert_eq!(fix("###### Title\n").updated_text, "= Title =\n");
    }

    #[test]
    fn hash_heading_cleanup_variants() {
        assert_eq!(fix("##Title\n").updated_text, "== Title ==\n");
        assert_eq!(fix("#   Title   \n").updated_text, "== Title ==\n");
        assert_eq!(fix("# Title #\n").updated_text, "== Title ==\n");
        assert_eq!(fix("# A   Long  Title\n").updated_text, "== A Long Title ==\n");
    }

    #[test]
    fn bare_hashes_stay_literal() {
        let result = fix("##\n");
        assert_eq!(result.updated_text, "##\n");
        assert!(result.is_unchanged());
    }

    #[test]
    fn empty_code_block_is_dropped() {
        let result = fix("before\n```\n```\nafter\n");
        assert_eq!(result.updated_text, "before\nafter\n");
        assert!(result.changes.iter().any(|c| c.contains("empty code block")));
    }

    #[test]
    fn single_line_block_becomes_inline_code() {
        let result = fix("```\ncode();\n```\n");
        assert_eq!(result.updated_text, "`code();`\n");
    }

    #[test]
    fn inline_conversion_escapes_backticks() {
        let result = fix("```\na ` b\n```\n");
        assert_eq!(result.updated_text, "`a \\` b`\n");
    }

    #[test]
    fn multi_line_block_indented_style() {
        let result = fix("```php\necho 'a';\necho 'b';\n```\n");

        assert_eq!(result.updated_text, "    echo 'a';\n    echo 'b';\n");
        assert!(!result.updated_text.contains("```"));
        assert!(
            result
                .changes
                .iter()
                .any(|c| c.contains("language tag \"php\""))
        );
    }

    #[test]
    fn multi_line_block_fenced_style_keeps_markers_and_lang() {
        let result = auto_fix("```php\necho 'a';\necho 'b';\n```\n", MultiLineStyle::Fenced);

        assert_eq!(result.updated_text.matches("```").count(), 2);
        assert!(result.updated_text.starts_with("```php\n"));
        assert!(result.is_unchanged());
    }

    #[test]
    fn fenced_style_normalizes_mixed_indentation() {
        let result = auto_fix("```\n    a();\n\tb();\n```\n", MultiLineStyle::Fenced);

        assert_eq!(result.updated_text, "```\n    a();\n    b();\n```\n");
        assert!(result.changes.iter().any(|c| c.contains("normalized code block")));
    }

    #[test]
    fn tab_only_fence_logs_the_rewrite() {
        let result = auto_fix("```\n\tfoo();\n\tbar();\n```\n", MultiLineStyle::Fenced);

        assert_eq!(result.updated_text, "```\n    foo();\n    bar();\n```\n");
        assert!(!result.is_unchanged());
        assert_eq!(result.changes.len(), 1);

        let again = auto_fix(&result.updated_text, MultiLineStyle::Fenced);
        assert!(again.is_unchanged());
    }

    #[test]
    fn unclosed_fence_runs_to_end_of_input() {
        let result = fix("```\na();\nb();");
        assert_eq!(result.updated_text, "    a();\n    b();");
    }

    #[test]
    fn fence_interior_lines_are_not_treated_as_headings(){
        let result = auto_fix("```\n== not a heading\n# not either\n```\n", MultiLineStyle::Fenced);
        assert!(result.updated_text.contains("== not a heading"));
        assert!(result.updated_text.contains("# not either"));
    }

    #[test]
    fn blank_runs_collapse_to_two_with_one_log_entry() {
        let result = fix("a\n\n\n\n\nb\n\n\n\nc\n");

        assert_eq!(result.updated_text, "a\n\n\nb\n\n\nc\n");
        let entries: Vec<_> = result
            .changes
            .iter()
            .filter(|c| c.contains("blank lines"))
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn fix_is_idempotent() {
        let messy = "\
# My Plugin

== Description =
Some **text** here.

```php
echo 'hi';
echo 'bye';
```



### Notes #
Done.
";
        let once = fix(messy);
        let twice = fix(&once.updated_text);

        assert_eq!(twice.updated_text, once.updated_text);
        assert!(twice.is_unchanged(), "second run changed: {:?}", twice.changes);
    }

    #[test]
    fn arbitrary_broken_input_never_panics() {
        for text in ["", "=", "```", "#", "======\n", "```\n", "\n\n\n"] {
            let _ = fix(text);
        }
    }
}
