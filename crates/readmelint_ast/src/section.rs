//! Sections: `== Title ==` delimited content blocks.

use serde::{Deserialize, Serialize};

/// A titled content block delimited by a `== Title ==` line.
///
/// Sections are produced strictly in document order. A malformed heading
/// (wrong number of `=`, missing interior spacing) does not start a section;
/// its text is absorbed into the previous section's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Trimmed section title.
    pub title: String,

    /// Raw text between this heading and the next, trimmed.
    pub content: String,

    /// Heading depth. Sections are always depth 2.
    pub level: u8,

    /// 0-based source line index of the heading line.
    pub line_start: u32,

    /// 0-based source line index of the last line belonging to this section.
    pub line_end: u32,
}

impl Section {
    /// Creates a new section.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        line_start: u32,
        line_end: u32,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            level: 2,
            line_start,
            line_end,
        }
    }

    /// Returns true if the section title matches `name` case-insensitively.
    pub fn is_titled(&self, name: &str) -> bool {
        self.title.eq_ignore_ascii_case(name)
    }
}
