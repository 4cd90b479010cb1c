//! The compliance validator.
//!
//! `validate` re-derives every diagnostic from scratch and never reads the
//! parser's seeded errors/warnings. The duplication with the parser's
//! structural checks is deliberate isolation: the validator must be usable
//! and testable standalone.
//!
//! Checks run in declaration order and never short-circuit each other; the
//! final diagnostic list is stably sorted by line so output is reproducible
//! (diagnostics without a position keep declaration order, at the front).

mod content;
mod header;
mod markup;
mod score;
mod sections;

use readmelint_ast::ParsedReadme;
use tracing::debug;

use crate::ValidationResult;

/// Validates a parsed readme against the wordpress.org rule set.
pub fn validate(readme: &ParsedReadme) -> ValidationResult {
    let mut diagnostics = Vec::new();

    header::check(readme, &mut diagnostics);
    sections::check(readme, &mut diagnostics);
    markup::check_heading_integrity(readme, &mut diagnostics);
    content::check_promotional_language(readme, &mut diagnostics);
    markup::check_markdown_integrity(readme, &mut diagnostics);
    content::check_email_addresses(readme, &mut diagnostics);
    content::check_file_size(readme, &mut diagnostics);

    diagnostics.sort_by_key(|d| d.line.unwrap_or(0));

    let score = score::compute(readme, &diagnostics);
    debug!(
        diagnostics = diagnostics.len(),
        score, "validation complete"
    );

    ValidationResult { diagnostics, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmelint_parser::parse;

    const COMPLETE: &str = "\
=== My Plugin ===
Contributors: alice, bob
Donate link: https://example.com/donate
Tags: seo, sitemap
Requires at least: 5.0
Tested up to: 6.4
Stable tag: 1.2.3
Requires PHP: 7.4
License: GPLv2 or later
License URI: https://www.gnu.org/licenses/gpl-2.0.html

A plugin that generates sitemaps and keeps them current.

== Description ==
This plugin builds a sitemap for your site and refreshes it whenever
content changes. It integrates with the editor, supports custom post
types, and keeps memory usage flat even on very large sites. Nothing to
configure: activate it and the sitemap appears.

== Installation ==
1. Upload the plugin folder to the plugins directory.
2. Activate the plugin through the Plugins menu.

== Frequently Asked Questions ==
= Does it work with custom post types? =
Yes, they are included automatically.

== Screenshots ==
1. The settings screen.
2. The generated sitemap.

== Changelog ==
= 1.2.3 =
* Fixed a cache invalidation bug.
* Reduced memory usage.
";

    #[test]
    fn complete_readme_is_valid_with_high_score() {
        let result = validate(&parse(COMPLETE));

        let errors: Vec<_> = result.errors().collect();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert!(result.is_valid());
        assert!(result.score > 80, "score was {}", result.score);
    }

    #[test]
    fn missing_contributors_invalidates() {
        let text = COMPLETE.replace("Contributors: alice, bob\n", "");
        let result = validate(&parse(&text));

        assert!(!result.is_valid());
        assert!(
            result
                .errors()
                .any(|e| e.message.contains("Contributors is required"))
        );
    }

    #[test]
    fn diagnostics_are_line_ordered() {
        let text = format!("{COMPLETE}\n== Extra ==\nThis is the best plugin.\ncontact me at a@b.com\n");
        let result = validate(&parse(&text));

        let lines: Vec<u32> = result
            .diagnostics
            .iter()
            .filter_map(|d| d.line)
            .collect();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn validation_is_deterministic() {
        let text = COMPLETE.replace("Tags: seo, sitemap", "Tags: a, b, c, d, e, f, g");
        let first = validate(&parse(&text));
        let second = validate(&parse(&text));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_never_panics() {
        let result = validate(&parse(""));
        assert!(!result.is_valid());
        assert_eq!(result.score, 0);
    }
}
