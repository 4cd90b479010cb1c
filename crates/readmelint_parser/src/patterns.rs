//! Shared line patterns for the readme format.
//!
//! The three canonical heading shapes all require interior spacing, so a
//! line like `===Title===` or `== X ===` matches none of them and is treated
//! as body text by the structural passes (the validator flags it separately).

use std::sync::LazyLock;

use regex::Regex;

/// `=== Plugin Name ===` - exactly three `=` on each side.
pub static PLUGIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^===\s+(.+?)\s+===$").expect("valid regex"));

/// `== Section Title ==` - exactly two `=` on each side.
pub static SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^==\s+(.+?)\s+==$").expect("valid regex"));

/// `= Sub Item =` - exactly one `=` on each side (FAQ question, changelog version).
pub static SUB_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=\s+(.+?)\s+=$").expect("valid regex"));

/// Version strings: `N.N` or `N.N.N`.
pub static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("valid regex"));

/// Header fields recognized in the metadata block, in match priority order.
pub const HEADER_FIELDS: &[&str] = &[
    "Contributors",
    "Donate link",
    "Tags",
    "Requires at least",
    "Tested up to",
    "Stable tag",
    "Requires PHP",
    "License",
    "License URI",
];

static FIELD_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    HEADER_FIELDS
        .iter()
        .map(|name| {
            let pattern = format!(r"(?i)^{}:\s*(.+)$", regex::escape(name));
            (*name, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Matches a line against the known header fields in fixed priority order.
///
/// Returns the canonical field name and the trimmed value.
pub fn match_field(line: &str) -> Option<(&'static str, &str)> {
    for (name, pattern) in FIELD_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            let value = caps.get(1).map_or("", |m| m.as_str()).trim();
            return Some((name, value));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn plugin_name_requires_exactly_three_equals() {
        assert!(PLUGIN_NAME.is_match("=== My Plugin ==="));
        assert!(!PLUGIN_NAME.is_match("==== My Plugin ===="));
        assert!(!PLUGIN_NAME.is_match("== My Plugin =="));
        assert!(!PLUGIN_NAME.is_match("=== My Plugin ===="));
        assert!(!PLUGIN_NAME.is_match("===My Plugin==="));
    }

    #[test]
    fn section_requires_exactly_two_equals() {
        assert!(SECTION.is_match("== Description =="));
        assert!(!SECTION.is_match("=== Description ==="));
        assert!(!SECTION.is_match("== Description ="));
        assert!(!SECTION.is_match("= Description ="));
        assert!(!SECTION.is_match("==Description=="));
    }

    #[test]
    fn sub_item_shape() {
        assert!(SUB_ITEM.is_match("= 1.0.2 ="));
        assert!(SUB_ITEM.is_match("= How do I install? ="));
        assert!(!SUB_ITEM.is_match("== 1.0.2 =="));
    }

    #[rstest]
    #[case("5.0", true)]
    #[case("6.4.1", true)]
    #[case("trunk", false)]
    #[case("5", false)]
    #[case("5.0.0.1", false)]
    fn version_shape(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(VERSION.is_match(value), valid);
    }

    #[test]
    fn field_matching_is_case_insensitive() {
        let (name, value) = match_field("contributors: alice, bob").unwrap();
        assert_eq!(name, "Contributors");
        assert_eq!(value, "alice, bob");

        let (name, value) = match_field("STABLE TAG: 1.0.0").unwrap();
        assert_eq!(name, "Stable tag");
        assert_eq!(value, "1.0.0");
    }

    #[test]
    fn license_uri_is_distinct_from_license() {
        let (name, _) = match_field("License: GPLv2").unwrap();
        assert_eq!(name, "License");

        let (name, value) = match_field("License URI: https://www.gnu.org/licenses/gpl-2.0.html").unwrap();
        assert_eq!(name, "License URI");
        assert_eq!(value, "https://www.gnu.org/licenses/gpl-2.0.html");
    }

    #[test]
    fn non_field_lines_do_not_match() {
        assert!(match_field("A short description of the plugin.").is_none());
        assert!(match_field("Contributors").is_none());
        assert!(match_field("").is_none());
    }
}
