//! Text normalization and note segmentation.

use std::sync::LazyLock;

use mhforms_core::dates::parse_leading_date;
use mhforms_core::models::note::ClinicalNote;
use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern"));

/// Unify line endings and spacing so every format segments the same way.
///
/// LF line endings, NBSP as a plain space, no trailing whitespace, and at
/// most one blank line in a row.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(['\u{00A0}', '\u{202F}'], " ")
        .replace('\u{FEFF}', "");
    let trimmed = unified
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_RUNS.replace_all(&trimmed, "\n\n").trim().to_string()
}

/// Strip separators left between a date marker and the note body.
fn strip_marker_tail(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '|' | ':' | '-' | ','))
}

/// Split normalized text into notes.
///
/// A line starting with a date opens a new dated note; lines before the
/// first marker form one undated note. Text with no markers at all is split
/// into undated notes on blank lines.
pub fn segment_notes(text: &str, source: Option<&str>) -> Vec<ClinicalNote> {
    let mut notes = Vec::new();
    let mut current: Option<(Option<jiff::civil::Date>, Vec<&str>)> = None;
    let mut preamble: Vec<&str> = Vec::new();
    let mut saw_marker = false;

    for line in text.lines() {
        if let Some((date, end)) = parse_leading_date(line) {
            saw_marker = true;
            if let Some((date, body)) = current.take() {
                push_note(&mut notes, date, &body, source);
            }
            current = Some((Some(date), vec![strip_marker_tail(&line[end..])]));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        } else {
            preamble.push(line);
        }
    }

    if !saw_marker {
        return PARAGRAPH_BREAK
            .split(text)
            .filter_map(|para| {
                let para = para.trim();
                (!para.is_empty()).then(|| note_with_source(None, para, source))
            })
            .collect();
    }

    if let Some((date, body)) = current.take() {
        push_note(&mut notes, date, &body, source);
    }
    let preamble = preamble.join("\n");
    if !preamble.trim().is_empty() {
        notes.insert(0, note_with_source(None, preamble.trim(), source));
    }
    notes
}

fn push_note(
    notes: &mut Vec<ClinicalNote>,
    date: Option<jiff::civil::Date>,
    body: &[&str],
    source: Option<&str>,
) {
    let body = body.join("\n");
    let body = body.trim();
    if !body.is_empty() {
        notes.push(note_with_source(date, body, source));
    }
}

fn note_with_source(
    date: Option<jiff::civil::Date>,
    body: &str,
    source: Option<&str>,
) -> ClinicalNote {
    let note = ClinicalNote::new(date, body);
    match source {
        Some(source) => note.with_source(source),
        None => note,
    }
}
