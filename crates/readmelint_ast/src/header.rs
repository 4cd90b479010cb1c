//! The readme header block: plugin metadata above the first section.

use serde::{Deserialize, Serialize};

/// Plugin metadata parsed from the header region of a `readme.txt`.
///
/// Unset fields are empty strings / empty lists, never `None`, so downstream
/// checks can treat every field uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Plugin name from the `=== Name ===` line.
    pub plugin_name: String,

    /// Contributor usernames, comma-split in source order.
    pub contributors: Vec<String>,

    /// Donation URL, if present.
    pub donate_link: String,

    /// Tags, comma-split with insertion order preserved.
    pub tags: Vec<String>,

    /// Minimum WordPress version.
    pub requires_at_least: String,

    /// Highest WordPress version the plugin was tested against.
    pub tested_up_to: String,

    /// Stable release tag.
    pub stable_tag: String,

    /// Minimum PHP version, if declared.
    pub requires_php: String,

    /// License name.
    pub license: String,

    /// License URL, if present.
    pub license_uri: String,

    /// Short description assembled from the free text below the plugin name.
    pub short_description: String,
}

impl Header {
    /// Creates an empty header.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_defaults_are_empty() {
        let header = Header::new();

        assert!(header.plugin_name.is_empty());
        assert!(header.contributors.is_empty());
        assert!(header.tags.is_empty());
        assert!(header.requires_php.is_empty());
        assert!(header.short_description.is_empty());
    }

    #[test]
    fn test_header_serialization_roundtrip() {
        let header = Header {
            plugin_name: "My Plugin".to_string(),
            contributors: vec!["alice".to_string(), "bob".to_string()],
            tags: vec!["seo".to_string()],
            requires_at_least: "5.0".to_string(),
            tested_up_to: "6.4".to_string(),
            stable_tag: "1.2.3".to_string(),
            license: "GPLv2".to_string(),
            ..Header::default()
        };

        let json = serde_json::to_string(&header).unwrap();
        let back: Header = serde_json::from_str(&json).unwrap();
        assert_eq!(header, back);
    }
}
