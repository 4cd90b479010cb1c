//! Section extraction: an independent pass over all lines.

use readmelint_ast::Section;

use crate::patterns;

/// Splits the document into `== Title ==` sections.
///
/// Lines before the first section heading are discarded (they belong to the
/// header region). Malformed headings do not open a section; they are
/// absorbed into the currently open section's content.
pub fn extract_sections(lines: &[&str]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut open: Option<(String, u32, Vec<&str>)> = None;

    for (idx, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();

        if let Some(caps) = patterns::SECTION.captures(line) {
            if let Some((title, start, buffer)) = open.take() {
                sections.push(close_section(title, start, idx as u32 - 1, buffer));
            }
            open = Some((caps[1].trim().to_string(), idx as u32, Vec::new()));
        } else if let Some((_, _, buffer)) = open.as_mut() {
            buffer.push(raw_line);
        }
    }

    if let Some((title, start, buffer)) = open {
        let end = lines.len().saturating_sub(1) as u32;
        sections.push(close_section(title, start, end, buffer));
    }

    sections
}

fn close_section(title: String, start: u32, end: u32, buffer: Vec<&str>) -> Section {
    let content = buffer.join("\n").trim().to_string();
    Section::new(title, content, start, end)
}
