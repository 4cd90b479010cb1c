//! Output formatting for the check command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use readmelint_ast::Severity;
use readmelint_core::ValidationResult;

pub fn print_text(reports: &[(PathBuf, ValidationResult)]) {
    for (path, result) in reports {
        println!("\n{} (score {}/100):", path.display(), result.score);

        if result.diagnostics.is_empty() {
            println!("  no issues");
            continue;
        }
        for diag in &result.diagnostics {
            let severity = match diag.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            let location = match (diag.line, diag.column) {
                (Some(line), Some(column)) => format!("{line}:{column}"),
                (Some(line), None) => line.to_string(),
                _ => "-".to_string(),
            };
            println!(
                "  {} {} [{}]: {}",
                location, severity, diag.rule, diag.message
            );
            if let Some(suggestion) = &diag.suggestion {
                println!("      suggestion: {suggestion}");
            }
        }
    }

    // Summary
    let total_files = reports.len();
    let total_errors: usize = reports.iter().map(|(_, r)| r.errors().count()).sum();
    let total_warnings: usize = reports.iter().map(|(_, r)| r.warnings().count()).sum();

    println!();
    println!(
        "Checked {} files, found {} errors and {} warnings",
        total_files, total_errors, total_warnings
    );
}

pub fn print_json(reports: &[(PathBuf, ValidationResult)]) -> Result<()> {
    let output: Vec<_> = reports
        .iter()
        .map(|(path, result)| {
            serde_json::json!({
                "path": path.display().to_string(),
                "valid": result.is_valid(),
                "score": result.score,
                "diagnostics": result.diagnostics,
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
