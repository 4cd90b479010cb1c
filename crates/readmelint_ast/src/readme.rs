//! The parsed readme aggregate.

use serde::{Deserialize, Serialize};

use crate::{Diagnostic, Header, Section};

/// A fully parsed `readme.txt`.
///
/// Built once per parse call and not mutated afterwards. The embedded
/// `errors`/`warnings` are the parser's structural findings (missing
/// required fields, format issues); the compliance validator re-derives its
/// own complete set independently and never trusts these for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReadme {
    /// Parsed header metadata.
    pub header: Header,

    /// Sections in document order.
    pub sections: Vec<Section>,

    /// The raw source text.
    pub raw: String,

    /// Structural errors seeded during parsing.
    pub errors: Vec<Diagnostic>,

    /// Structural warnings seeded during parsing.
    pub warnings: Vec<Diagnostic>,
}

impl ParsedReadme {
    /// Finds a section by title, case-insensitively.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_titled(title))
    }

    /// Returns true if a section with the given title exists.
    pub fn has_section(&self, title: &str) -> bool {
        self.section(title).is_some()
    }
}
