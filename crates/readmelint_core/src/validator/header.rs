//! Header field checks (required fields, formats, lengths).

use std::sync::LazyLock;

use readmelint_ast::{Diagnostic, ParsedReadme};
use readmelint_parser::{REQUIRED_FIELDS, field_value, patterns};
use regex::Regex;

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_-]{3,60}$").expect("valid regex"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+\..+$").expect("valid regex"));

/// GPL-compatible license keywords accepted by wordpress.org.
const LICENSE_ALLOW_LIST: &[&str] = &["gpl", "gplv2", "gplv3", "mit", "apache", "bsd"];

fn required_field_suggestion(key: &str) -> &'static str {
    match key {
        "plugin_name" => "=== Plugin Name ===",
        "contributors" => "Contributors: your_wordpress_username",
        "tags" => "Tags: tag1, tag2",
        "requires_at_least" => "Requires at least: 5.0",
        "tested_up_to" => "Tested up to: 6.4",
        "stable_tag" => "Stable tag: 1.0.0",
        "license" => "License: GPLv2 or later",
        _ => "A concise one-sentence summary of the plugin.",
    }
}

pub fn check(readme: &ParsedReadme, diagnostics: &mut Vec<Diagnostic>) {
    let header = &readme.header;

    // 1. Required-field presence.
    for (display, key) in REQUIRED_FIELDS {
        if field_value(header, key).is_empty() {
            diagnostics.push(
                Diagnostic::new("required-field", format!("{display} is required"))
                    .with_field(*key)
                    .with_suggestion(required_field_suggestion(key)),
            );
        }
    }

    // 2. Plugin name length bounds.
    let name_len = header.plugin_name.chars().count();
    if !header.plugin_name.is_empty() && !(3..=60).contains(&name_len) {
        diagnostics.push(
            Diagnostic::warning(
                "name-length",
                format!("Plugin name is {name_len} characters; expected between 3 and 60"),
            )
            .with_field("plugin_name"),
        );
    }

    // 3. Contributor username shape. Invalid entries are a warning, not blocking.
    for contributor in &header.contributors {
        if !USERNAME.is_match(contributor) {
            diagnostics.push(
                Diagnostic::warning(
                    "contributor-username",
                    format!("\"{contributor}\" is not a valid wordpress.org username"),
                )
                .with_field("contributors"),
            );
        }
    }

    // 4. Tag count and length.
    if header.tags.len() > 5 {
        diagnostics.push(
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
    for tag in &header.tags {
        let len = tag.chars().count();
        if len > 50 {
            diagnostics.push(
                Diagnostic::warning(
                    "tag-length",
                    format!("Tag \"{tag}\" is {len} characters; keep tags under 50"),
                )
                .with_field("tags"),
            );
        }
    }

    // 5. Version formats.
    for (display, key, value) in [
        ("Requires at least", "requires_at_least", &header.requires_at_least),
        ("Tested up to", "tested_up_to", &header.tested_up_to),
        ("Stable tag", "stable_tag", &header.stable_tag),
        ("Requires PHP", "requires_php", &header.requires_php),
    ] {
        if !value.is_empty() && !patterns::VERSION.is_match(value) {
            diagnostics.push(
                Diagnostic::warning(
                    "version-format",
                    format!("{display} \"{value}\" is not a version like 1.0 or 1.0.0"),
                )
                .with_field(key),
            );
        }
    }

    // 6. Short description: three independent quality checks.
    let description = &header.short_description;
    if !description.is_empty() {
        let len = description.chars().count();
        if len > 150 {
            diagnostics.push(
                Diagnostic::warning(
                    "short-description",
                    format!("Short description is {len} characters; keep it under 150"),
                )
                .with_field("short_description"),
            );
        }
        if description.contains('<') || description.contains('>') {
            diagnostics.push(
                Diagnostic::warning(
                    "short-description",
                    "Short description must not contain markup",
                )
                .with_field("short_description"),
            );
        }
        if len < 20 {
            diagnostics.push(
                Diagnostic::warning(
                    "short-description",
                    format!("Short description is only {len} characters; describe the plugin in a full sentence"),
                )
                .with_field("short_description"),
            );
        }
    }

    // 7. License compatibility.
    if !header.license.is_empty() {
        let lower = header.license.to_lowercase();
        if !LICENSE_ALLOW_LIST.iter().any(|l| lower.contains(l)) {
            diagnostics.push(
                Diagnostic::warning(
                    "license-compat",
                    format!(
                        "License \"{}\" does not look GPL-compatible",
                        header.license
                    ),
                )
                .with_field("license"),
            );
        }
    }

    // 8. URL-shaped fields.
    for (display, key, value) in [
        ("Donate link", "donate_link", &header.donate_link),
        ("License URI", "license_uri", &header.license_uri),
    ] {
        if !value.is_empty() && !URL.is_match(value) {
            diagnostics.push(
                Diagnostic::warning(
                    "link-format",
                    format!("{display} \"{value}\" is not a valid http(s) URL"),
                )
                .with_field(key),
            );
        }
    }
}
