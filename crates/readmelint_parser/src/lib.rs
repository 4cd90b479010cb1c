//! # readmelint_parser
//!
//! Structural parser for WordPress plugin `readme.txt` files.
//!
//! `parse` splits raw text into a [`Header`] record and an ordered list of
//! `== Title ==` [`Section`]s, and seeds structural diagnostics for missing
//! required fields and basic format issues. Parsing is total: malformed
//! input never fails, it just produces fewer recognized parts.
//!
//! ## Example
//!
//! ```rust
//! use readmelint_parser::parse;
//!
//! let readme = parse("=== My Plugin ===\nTags: seo\n\n== Description ==\nBody.\n");
//! assert_eq!(readme.header.plugin_name, "My Plugin");
//! assert_eq!(readme.sections.len(), 1);
//! ```

mod header;
pub mod patterns;
mod sections;

use readmelint_ast::{Diagnostic, Header, ParsedReadme};

pub use header::scan_header;
pub use sections::extract_sections;

/// The eight required header fields, as (display name, field key) pairs.
///
/// `Requires at least` is treated as required, matching the wordpress.org
/// specification.
pub const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("Plugin name", "plugin_name"),
    ("Contributors", "contributors"),
    ("Tags", "tags"),
    ("Requires at least", "requires_at_least"),
    ("Tested up to", "tested_up_to"),
    ("Stable tag", "stable_tag"),
    ("License", "license"),
    ("Short description", "short_description"),
];

/// Returns the value of a required field as a presence-checkable string.
pub fn field_value<'a>(header: &'a Header, key: &str) -> std::borrow::Cow<'a, str> {
    use std::borrow::Cow;
    match key {
        "plugin_name" => Cow::Borrowed(header.plugin_name.as_str()),
        "contributors" => Cow::Owned(header.contributors.join(",")),
        "tags" => Cow::Owned(header.tags.join(",")),
        "requires_at_least" => Cow::Borrowed(header.requires_at_least.as_str()),
        "tested_up_to" => Cow::Borrowed(header.tested_up_to.as_str()),
        "stable_tag" => Cow::Borrowed(header.stable_tag.as_str()),
        "license" => Cow::Borrowed(header.license.as_str()),
        "short_description" => Cow::Borrowed(header.short_description.as_str()),
        _ => Cow::Borrowed(""),
    }
}

/// Parses raw readme text into a [`ParsedReadme`].
///
/// The returned value carries the parser's own structural errors/warnings;
/// the compliance validator in `readmelint_core` re-derives a complete set
/// independently and never trusts these for scoring.
pub fn parse(text: &str) -> ParsedReadme {
    let lines: Vec<&str> = text.lines().collect();

    let header = scan_header(&lines);
    let sections = extract_sections(&lines);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    seed_structural_diagnostics(&header, &mut errors, &mut warnings);

    ParsedReadme {
        header,
        sections,
        raw: text.to_string(),
        errors,
        warnings,
    }
}

fn seed_structural_diagnostics(
    header: &Header,
    errors: &mut Vec<Diagnostic>,
    warnings: &mut Vec<Diagnostic>,
) {
    for (display, key) in REQUIRED_FIELDS {
        if field_value(header, key).is_empty() {
            errors.push(
                Diagnostic::new("required-field", format!("{display} is required"))
                    .with_field(*key),
            );
        }
    }

    if header.tags.len() > 5 {
        warnings.push(
            Diagnostic::warning(
                "tag-limit",
                format!(
                    "Too many tags ({}); wordpress.org uses at most 5",
                    header.tags.len()
                ),
            )
            .with_field("tags"),
        );
    }

    let description_len = header.short_description.chars().count();
    if description_len > 150 {
        warnings.push(
            Diagnostic::warning(
                "short-description",
                format!("Short description is {description_len} characters; keep it under 150"),
            )
            .with_field("short_description"),
        );
    }

    for (display, key) in [
        ("Requires at least", "requires_at_least"),
        ("Tested up to", "tested_up_to"),
        ("Stable tag", "stable_tag"),
        ("Requires PHP", "requires_php"),
    ] {
        let value = match key {
            "requires_at_least" => &header.requires_at_least,
            "tested_up_to" => &header.tested_up_to,
            "stable_tag" => &header.stable_tag,
            _ => &header.requires_php,
        };
        if !value.is_empty() && !patterns::VERSION.is_match(value) {
            warnings.push(
                Diagnostic::warning(
                    "version-format",
                    format!("{display} \"{value}\" is not a version like 1.0 or 1.0.0"),
                )
                .with_field(key),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WELL_FORMED: &str = "\
=== My Plugin ===
Contributors: alice, bob
Tags: seo, sitemap
Requires at least: 5.0
Tested up to: 6.4
Stable tag: 1.2.3
License: GPLv2 or later

A short description of the plugin.

== Description ==
The long description.

== Installation ==
1. Upload the plugin.

== Changelog ==
= 1.0 =
* Initial release.
";

    #[test]
    fn parse_well_formed() {
        let readme = parse(WELL_FORMED);

        assert_eq!(readme.header.plugin_name, "My Plugin");
        assert_eq!(readme.sections.len(), 3);
        assert_eq!(readme.sections[0].title, "Description");
        assert_eq!(readme.sections[1].title, "Installation");
        assert_eq!(readme.sections[2].title, "Changelog");
        assert!(readme.errors.is_empty());
        assert!(readme.warnings.is_empty());
        assert_eq!(readme.raw, WELL_FORMED);
    }

    #[test]
    fn missing_contributors_is_an_error() {
        let text = WELL_FORMED.replace("Contributors: alice, bob\n", "");
        let readme = parse(&text);

        let messages: Vec<&str> = readme.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Contributors is required"]);
        assert_eq!(readme.errors[0].field.as_deref(), Some("contributors"));
    }

    #[test]
    fn empty_input_reports_all_required_fields() {
        let readme = parse("");

        assert_eq!(readme.errors.len(), REQUIRED_FIELDS.len());
        assert!(readme.sections.is_empty());
    }

    #[test]
    fn malformed_heading_produces_no_section() {
        let readme = parse("== Description =\nbody text\n");
        assert!(readme.sections.is_empty());
    }

    #[test]
    fn too_many_tags_is_a_warning() {
        let text = WELL_FORMED.replace("Tags: seo, sitemap", "Tags: a, b, c, d, e, f");
        let readme = parse(&text);

        assert!(readme.errors.is_empty());
        assert_eq!(readme.warnings.len(), 1);
        assert_eq!(readme.warnings[0].rule, "tag-limit");
    }

    #[test]
    fn bad_version_is_a_warning() {
        let text = WELL_FORMED.replace("Stable tag: 1.2.3", "Stable tag: trunk");
        let readme = parse(&text);

        assert_eq!(readme.warnings.len(), 1);
        assert_eq!(readme.warnings[0].rule, "version-format");
        assert!(readme.warnings[0].message.contains("trunk"));
    }

    #[test]
    fn long_short_description_is_a_warning() {
        let long = "word ".repeat(40);
        let text = WELL_FORMED.replace("A short description of the plugin.", long.trim());
        let readme = parse(&text);

        assert!(
            readme
                .warnings
                .iter()
                .any(|w| w.rule == "short-description")
        );
    }

    #[test]
    fn section_count_matches_heading_count() {
        let text = "== A ==\nx\n== B ==\ny\n== C ==\nz\n";
        let readme = parse(text);

        let titles: Vec<&str> = readme.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
