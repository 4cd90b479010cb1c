//! Quality score derivation.

use readmelint_ast::{Diagnostic, ParsedReadme};

/// Derives the 0-100 quality score from the diagnostics plus content
/// bonuses: -15 per error, -5 per warning, then small rewards for the
/// sections and optional fields that make a readme genuinely useful.
pub fn compute(readme: &ParsedReadme, diagnostics: &[Diagnostic]) -> u8 {
    let mut score: i32 = 100;

    for diagnostic in diagnostics {
        score -= if diagnostic.is_error() { 15 } else { 5 };
    }

    if let Some(description) = readme.section("Description") {
        if description.content.chars().count() > 200 {
            score += 5;
        }
    }
    if readme.has_section("Installation") {
        score += 3;
    }
    if has_faq(readme) {
        score += 3;
    }
    if readme.has_section("Changelog") {
        score += 5;
    }
    if !readme.header.requires_php.is_empty() {
        score += 2;
    }
    if !readme.header.license_uri.is_empty() {
        score += 2;
    }

    score.clamp(0, 100) as u8
}

fn has_faq(readme: &ParsedReadme) -> bool {
    readme.sections.iter().any(|s| {
        let title = s.title.to_lowercase();
        title.contains("faq") || title == "frequently asked questions"
    })
}
