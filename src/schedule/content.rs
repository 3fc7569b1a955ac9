//! Splitting fetched text into slide sections.

/// Line that separates two slides.
pub const SECTION_SEPARATOR: &str = "---";

/// Split `content` into trimmed, non-empty sections.
///
/// A section boundary is a line equal to `---` (a trailing `\r` is ignored).
/// Dashes inside a line do not split.
///
/// ```
/// use pro6_export::schedule::split_sections;
/// assert_eq!(split_sections("A\n\n---\n\nB"), vec!["A", "B"]);
/// assert!(split_sections("").is_empty());
/// ```
pub fn split_sections(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == SECTION_SEPARATOR {
            push_section(&mut sections, &current);
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_section(&mut sections, &current);
    sections
}

fn push_section(sections: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sections.push(trimmed.to_string());
    }
}
