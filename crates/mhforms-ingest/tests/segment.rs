use jiff::civil::date;
use mhforms_ingest::segment::{normalize_text, segment_notes};

#[test]
fn normalization_unifies_spacing() {
    let raw = "\u{FEFF}Line one  \r\nLine\u{00A0}two\r\n\r\n\r\n\r\nLine three\t\n\n";
    assert_eq!(normalize_text(raw), "Line one\nLine two\n\nLine three");
}

#[test]
fn date_markers_open_dated_notes() {
    let text = "Ward round summary for Cedar Ward\n\
                12/03/2023 Settled on the ward.\n\
                Took medication.\n\
                2023-03-14: Verbally aggressive to staff.\n\
                15th Mar 2023 - Attended OT.";
    let notes = segment_notes(text, Some("notes.txt"));
    assert_eq!(notes.len(), 4);

    assert_eq!(notes[0].date, None);
    assert_eq!(notes[0].body, "Ward round summary for Cedar Ward");

    assert_eq!(notes[1].date, Some(date(2023, 3, 12)));
    assert_eq!(notes[1].body, "Settled on the ward.\nTook medication.");

    assert_eq!(notes[2].date, Some(date(2023, 3, 14)));
    assert_eq!(notes[2].body, "Verbally aggressive to staff.");

    assert_eq!(notes[3].date, Some(date(2023, 3, 15)));
    assert_eq!(notes[3].body, "Attended OT.");
    assert!(notes.iter().all(|n| n.source.as_deref() == Some("notes.txt")));
}

#[test]
fn two_digit_years_and_marker_only_lines() {
    let text = "01-02-23\nSlept well.\n\n03.02.23 Low in mood.";
    let notes = segment_notes(text, None);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].date, Some(date(2023, 2, 1)));
    assert_eq!(notes[0].body, "Slept well.");
    assert_eq!(notes[1].date, Some(date(2023, 2, 3)));
}

#[test]
fn without_markers_blank_lines_split_notes() {
    let text = "First paragraph\ncontinues here.\n\nSecond paragraph.\n\n\nThird.";
    let notes = segment_notes(text, None);
    let bodies: Vec<&str> = notes.iter().map(|n| n.body.as_str()).collect();
    assert_eq!(bodies, vec!["First paragraph\ncontinues here.", "Second paragraph.", "Third."]);
    assert!(notes.iter().all(|n| n.date.is_none()));
}

#[test]
fn empty_text_has_no_notes() {
    assert!(segment_notes("", None).is_empty());
    assert!(segment_notes(&normalize_text("\n\n  \n"), None).is_empty());
}
