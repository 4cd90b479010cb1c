//! Header-field extraction and short-description accumulation.

use readmelint_ast::Header;

use crate::patterns;

/// Scans the header region of the document and builds a [`Header`].
///
/// The header region ends at the first `== Section ==` line. Every line in
/// it is tested against the known field patterns in fixed priority order.
/// The plugin-name line itself is looked for over the whole document, so a
/// misplaced `=== Name ===` after a section heading still names the plugin.
/// Free text following the plugin-name line becomes the short description:
/// lines accumulate until a field line, a blank line after at least one
/// collected line, or the header boundary, and are joined with single
/// spaces.
pub fn scan_header(lines: &[&str]) -> Header {
    let mut header = Header::new();

    let boundary = lines
        .iter()
        .position(|line| patterns::SECTION.is_match(line.trim()))
        .unwrap_or(lines.len());

    // Only the first three-equals line counts as the plugin name.
    let name_match = lines.iter().enumerate().find_map(|(idx, line)| {
        let caps = patterns::PLUGIN_NAME.captures(line.trim())?;
        let name = caps[1].trim();
        (!name.is_empty()).then(|| (idx, name.to_string()))
    });

    let name_line = name_match.as_ref().map(|(idx, _)| *idx);
    if let Some((_, name)) = name_match {
        header.plugin_name = name;
    }

    let mut description_lines: Vec<&str> = Vec::new();
    let mut description_done = false;

    for (idx, raw_line) in lines[..boundary].iter().enumerate() {
        let line = raw_line.trim();

        if Some(idx) == name_line {
            continue;
        }

        if let Some((field, value)) = patterns::match_field(line) {
            apply_field(&mut header, field, value);
            if !description_lines.is_empty() {
                description_done = true;
            }
            continue;
        }

        // Description text only starts below the plugin name line.
        let below_name = name_line.is_some_and(|n| idx > n);
        if !below_name || description_done {
            continue;
        }

        if line.is_empty() {
            if !description_lines.is_empty() {
                description_done = true;
            }
        } else {
            description_lines.push(line);
        }
    }

    header.short_description = description_lines.join(" ");
    header
}

fn apply_field(header: &mut Header, field: &str, value: &str) {
    match field {
        "Contributors" => {
            // Placeholder values like "(this should be a list of ...)" are ignored.
            if !value.starts_with('(') {
                header.contributors = split_list(value);
            }
        }
        "Donate link" => header.donate_link = value.to_string(),
        "Tags" => header.tags = split_list(value),
        "Requires at least" => header.requires_at_least = value.to_string(),
        "Tested up to" => header.tested_up_to = value.to_string(),
        "Stable tag" => header.stable_tag = value.to_string(),
        "Requires PHP" => header.requires_php = value.to_string(),
        "License" => header.license = value.to_string(),
        "License URI" => header.license_uri = value.to_string(),
        _ => {}
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
