//! Diagnostic types for validation results.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
///
/// Only `Error` affects whether a readme is considered valid. `Info` is
/// reserved: no current check emits it, but it is part of the contract so
/// hosts can handle it without a breaking change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - blocks validity, must be fixed.
    #[default]
    Error,
    /// Warning - quality issue, reduces the score.
    Warning,
    /// Info - informational message.
    Info,
}

/// A single finding from the parser or the validator.
///
/// All diagnostics are data, never exceptions: the pipeline functions do not
/// fail on malformed content. Position fields are 1-indexed and populated
/// whenever the originating check can localize itself; aggregate checks
/// (missing field, file size) leave them unset. `suggestion`, when present,
/// is a ready-to-insert replacement fragment, not prose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The check that produced this diagnostic (e.g. `"required-field"`).
    pub rule: String,

    /// Human-readable message.
    pub message: String,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The header field this diagnostic concerns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Line number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Start column (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,

    /// End column (1-indexed, exclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,

    /// Replacement text an automated quick-fix can apply verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            severity: Severity::Error,
            field: None,
            line: None,
            column: None,
            end_column: None,
            suggestion: None,
        }
    }

    /// Creates a new warning diagnostic.
    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, message).with_severity(Severity::Warning)
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the related header field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the 1-indexed line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the 1-indexed column range on the current line.
    pub fn with_columns(mut self, column: u32, end_column: u32) -> Self {
        self.column = Some(column);
        self.end_column = Some(end_column);
        self
    }

    /// Sets the suggested replacement text.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns true if this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
