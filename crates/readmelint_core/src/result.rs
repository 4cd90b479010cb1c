//! Validation result type.

use readmelint_ast::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};

/// The outcome of validating one readme.
///
/// Rebuilt in full on every validate call; there is no incremental state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// All diagnostics, ordered by check declaration and then stably by line.
    pub diagnostics: Vec<Diagnostic>,

    /// Derived quality score in `[0, 100]`.
    pub score: u8,
}

impl ValidationResult {
    /// Returns the error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Returns the non-error diagnostics (warnings and infos).
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// Counts diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// A readme is valid when it has no errors; warnings only lower the score.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult {
            diagnostics: Vec::new(),
            score: 100,
        };
        assert!(result.is_valid());
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_warnings_do_not_block_validity() {
        let result = ValidationResult {
            diagnostics: vec![Diagnostic::warning("tag-limit", "too many tags")],
            score: 95,
        };
        assert!(result.is_valid());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn test_errors_block_validity() {
        let result = ValidationResult {
            diagnostics: vec![
                Diagnostic::new("required-field", "License is required"),
                Diagnostic::warning("tag-limit", "too many tags"),
            ],
            score: 80,
        };
        assert!(!result.is_valid());
        assert_eq!(result.count(Severity::Error), 1);
        assert_eq!(result.count(Severity::Warning), 1);
    }
}
