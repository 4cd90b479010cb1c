//! Section presence, ordering, and per-section content checks.

use std::sync::LazyLock;

use readmelint_ast::{Diagnostic, ParsedReadme, Section};
use regex::Regex;

/// Sections wordpress.org recommends every plugin readme carries.
const RECOMMENDED_SECTIONS: &[&str] = &[
    "Description",
    "Installation",
    "Frequently Asked Questions",
    "Screenshots",
    "Changelog",
];

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.").expect("valid regex"));

static FAQ_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=\s+.+\s+=$").expect("valid regex"));

static CHANGELOG_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=\s+\d+\.\d+").expect("valid regex"));

static SUB_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=\s+(.+?)\s+=$").expect("valid regex"));

pub fn check(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    // 9. Recommended sections present.
    for title in RECOMMENDED_SECTIONS {
        if !readme.has_section(title) {
            diagnostics.push(
                Diagnostic::warning(
                    "missing-section",
                    format!("Recommended section \"{title}\" is missing"),
                )
                .with_suggestion(format!("== {title} ==")),
            );
        }
    }

    // 10. The readme should lead with the description.
    if let Some(first) = readme.sections.first() {
        if !first.is_titled("Description") {
            diagnostics.push(
                Diagnostic::warning(
                    "section-order",
                    format!(
                        "The first section is \"{}\"; it should be \"Description\"",
                        first.title
                    ),
                )
                .with_line(first.line_start + 1),
            );
        }
    }

    // 11. Per-section specialized checks.
    for section in &readme.sections {
        check_section(section, diagnostics);
    }
}

fn check_section(section: &Section, diagnostics: &mut Vec<Diagnostic>) {
    let line = section.line_start + 1;

    if section.content.is_empty() {
        diagnostics.push(
            Diagnostic::warning(
                "section-content",
                format!("Section \"{}\" is empty", section.title),
            )
            .with_line(line),
        );
        // An empty section gets no further content checks.
        return;
    }

    match section.title.to_lowercase().as_str() {
        "description" => {
            let len = section.content.chars().count();
            if len < 100 {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        format!("Description is only {len} characters; aim for at least 100"),
                    )
                    .with_line(line),
                );
            } else if len > 2000 {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        format!("Description is {len} characters; consider trimming it below 2000"),
                    )
                    .with_line(line),
                );
            }
        }
        "installation" => {
            if section.content.chars().count() > 50 && !NUMBERED_LINE.is_match(&section.content) {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        "Installation steps should be numbered (1., 2., ...)",
                    )
                    .with_line(line),
                );
            }
        }
        "frequently asked questions" | "faq" => {
            if !FAQ_QUESTION.is_match(&section.content) {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        "FAQ should use = Question = headings",
                    )
                    .with_line(line),
                );
            }
        }
        "screenshots" => {
            if !NUMBERED_LINE.is_match(&section.content) {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        "Screenshots should be a numbered list matching the screenshot files",
                    )
                    .with_line(line),
                );
            }
        }
        "changelog" => {
            if !CHANGELOG_VERSION.is_match(&section.content) {
                diagnostics.push(
                    Diagnostic::warning(
                        "section-content",
                        "Changelog entries should use = 1.0 = version headings",
                    )
                    .with_line(line),
                );
            }
        }
        "upgrade notice" => {
            check_upgrade_notice(section, diagnostics);
        }
        _ => {}
    }
}

/// Each per-version chunk of the upgrade notice must stay under 300
/// characters; wordpress.org truncates longer notices in the updater UI.
fn check_upgrade_notice(section: &Section, diagnostics: &mut Vec<Diagnostic>) {
    let mut current_version: Option<String> = None;
    let mut chunk = String::new();

    let mut flush = |version: &Option<String>, chunk: &str, diagnostics: &mut Vec<Diagnostic>| {
        let len = chunk.trim().chars().count();
        if len > 300 {
            let label = version.as_deref().unwrap_or("(no version)");
            diagnostics.push(
                Diagnostic::warning(
                    "section-content",
                    format!("Upgrade notice for {label} is {len} characters; keep it under 300"),
                )
                .with_line(section.line_start + 1),
            );
        }
    };

    for line in section.content.lines() {
        if let Some(caps) = SUB_HEADING.captures(line.trim()) {
            flush(&current_version, &chunk, diagnostics);
            current_version = Some(caps[1].to_string());
            chunk.clear();
        } else {
            chunk.push_str(line);
            chunk.push('\n');
        }
    }
    flush(&current_version, &chunk, diagnostics);
}
