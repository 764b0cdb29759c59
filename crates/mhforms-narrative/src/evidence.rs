use mhforms_core::dates::format_date;
use mhforms_core::models::entry::ImportedEntry;

pub const DEFAULT_EVIDENCE_HEADER: &str = "Supporting evidence from the clinical notes:";

/// Append a block quoting every selected entry under `header`.
///
/// Dated entries read `[dd/mm/yyyy] text`; undated entries are the bare
/// text. When nothing is selected `text` is returned unchanged.
pub fn append_selected_evidence(text: &str, entries: &[ImportedEntry], header: &str) -> String {
    let lines: Vec<String> = entries
        .iter()
        .filter(|e| e.selected)
        .map(|entry| match entry.date {
            Some(date) => format!("[{}] {}", format_date(date), entry.text.trim()),
            None => entry.text.trim().to_string(),
        })
        .collect();
    if lines.is_empty() {
        return text.to_string();
    }

    let mut output = String::from(text);
    if !output.is_empty() {
        output.push_str("\n\n");
    }
    output.push_str(header);
    for line in lines {
        output.push('\n');
        output.push_str(&line);
    }
    output
}
