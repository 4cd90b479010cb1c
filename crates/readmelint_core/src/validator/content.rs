//! Content checks: promotional language, email addresses, file size.

use std::sync::LazyLock;

use readmelint_ast::{Diagnostic, ParsedReadme};
use regex::Regex;

static PROMO_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(best|ultimate|premium|advanced|professional)\b").expect("valid regex")
});

// Word boundaries alone keep "pro" from matching inside "provided" or
// "project"; the phrase forms are widened to cover the full phrase.
static PRO_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpro\b").expect("valid regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex")
});

const MAX_SIZE_BYTES: usize = 10 * 1024;

/// Flags marketing vocabulary, one warning per occurrence with the exact
/// column span.
pub fn check_promotional_language(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in readme.raw.lines().enumerate() {
        let line_number = index as u32 + 1;

        for m in PROMO_WORD.find_iter(line) {
            diagnostics.push(promo_warning(line, m.start(), m.end(), line_number));
        }

        for m in PRO_WORD.find_iter(line) {
            let (start, end) = widen_pro_span(line, m.start(), m.end());
            diagnostics.push(promo_warning(line, start, end, line_number));
        }
    }
}

fn promo_warning(line: &str, start: usize, end: usize, line_number: u32) -> Diagnostic {
    let column = char_column(line, start);
    let end_column = char_column(line, end);
    Diagnostic::warning(
        "promotional-language",
        format!("Avoid promotional language (\"{}\")", &line[start..end]),
    )
    .with_line(line_number)
    .with_columns(column, end_column)
}

/// Extends a standalone `pro` match to cover `pro version`, `pro edition`,
/// and `go pro`.
fn widen_pro_span(line: &str, start: usize, end: usize) -> (usize, usize) {
    let rest = line[end..].to_lowercase();
    if rest.starts_with(" version") || rest.starts_with(" edition") {
        return (start, end + 8);
    }
    if line[..start].to_lowercase().ends_with("go ") {
        return (start - 3, end);
    }
    (start, end)
}

/// Flags embedded email addresses; wordpress.org expects support to go
/// through the plugin's forum, not direct mail.
pub fn check_email_addresses(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in readme.raw.lines().enumerate() {
        for m in EMAIL.find_iter(line) {
            diagnostics.push(
                Diagnostic::warning(
                    "email-address",
                    format!(
                        "Remove the email address \"{}\"; direct users to the support forums",
                        m.as_str()
                    ),
                )
                .with_line(index as u32 + 1)
                .with_columns(char_column(line, m.start()), char_column(line, m.end())),
            );
        }
    }
}

/// Warns when the readme exceeds 10KB, using the character count as a
/// byte proxy.
pub fn check_file_size(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    let size = readme.raw.chars().count();
    if size > MAX_SIZE_BYTES {
        let kb = size as f64 / 1024.0;
        diagnostics.push(Diagnostic::warning(
            "file-size",
            format!("Readme is {kb:.1}KB; keep it under 10KB"),
        ));
    }
}

/// 1-based character column for a byte offset into `line`.
fn char_column(line: &str, byte_offset: usize) -> u32 {
    line[..byte_offset].chars().count() as u32 + 1
}
