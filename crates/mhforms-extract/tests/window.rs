use std::collections::BTreeSet;

use jiff::civil::{Date, date};
use mhforms_core::models::entry::ImportedEntry;
use mhforms_core::models::lookback::Lookback;
use mhforms_core::models::note::ClinicalNote;
use mhforms_extract::window::{
    dedup_fragments, filter_to_window, filter_with_reference, reference_date, sort_by_date_desc,
};

fn note(date: Option<Date>, body: &str) -> ClinicalNote {
    ClinicalNote::new(date, body)
}

#[test]
fn twelve_month_window_is_measured_from_latest_note() {
    let notes = vec![
        note(Some(date(2023, 1, 1)), "january review"),
        note(Some(date(2023, 6, 1)), "june review"),
        note(Some(date(2022, 1, 1)), "old review"),
    ];
    assert_eq!(reference_date(&notes), Some(date(2023, 6, 1)));
    assert_eq!(Lookback::Months(12).cutoff(date(2023, 6, 1)), date(2022, 6, 1));

    let kept = filter_to_window(notes, Lookback::Months(12));
    let bodies: Vec<&str> = kept.iter().map(|n| n.body.as_str()).collect();
    assert_eq!(bodies, vec!["january review", "june review"]);
}

#[test]
fn cutoff_date_itself_is_inside_the_window() {
    let notes = vec![
        note(Some(date(2022, 6, 1)), "on the cutoff"),
        note(Some(date(2023, 6, 1)), "latest"),
    ];
    assert_eq!(filter_to_window(notes, Lookback::Months(12)).len(), 2);
}

#[test]
fn undated_items_survive_any_window() {
    let notes = vec![
        note(None, "preamble"),
        note(Some(date(2023, 6, 1)), "latest"),
        note(Some(date(2020, 1, 1)), "ancient"),
    ];
    let kept = filter_to_window(notes, Lookback::Days(30));
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().any(|n| n.date.is_none()));
}

#[test]
fn refiltering_is_a_no_op() {
    let notes = vec![
        note(Some(date(2021, 3, 4)), "a"),
        note(Some(date(2022, 9, 1)), "b"),
        note(Some(date(2023, 2, 1)), "c"),
        note(None, "d"),
    ];
    let once = filter_to_window(notes, Lookback::Months(6));
    let twice = filter_to_window(once.clone(), Lookback::Months(6));
    assert_eq!(once, twice);
}

#[test]
fn explicit_reference_overrides_collection_maximum() {
    let notes = vec![
        note(Some(date(2023, 1, 1)), "a"),
        note(Some(date(2023, 6, 1)), "b"),
    ];
    let kept = filter_with_reference(notes, Lookback::Months(1), date(2023, 1, 15));
    assert_eq!(kept.len(), 2);
}

#[test]
fn dedup_compares_lowercase_prefix_and_keeps_first() {
    let shared = "x".repeat(200);
    let notes = vec![
        note(Some(date(2023, 1, 1)), &format!("{shared} first tail")),
        note(Some(date(2023, 2, 1)), &format!("{} second tail", shared.to_uppercase())),
        note(Some(date(2023, 3, 1)), "something else"),
    ];
    let kept = dedup_fragments(notes);
    assert_eq!(kept.len(), 2);
    assert!(kept[0].body.ends_with("first tail"));
}

#[test]
fn sort_puts_newest_first_and_undated_last() {
    let mut entries = vec![
        ImportedEntry::new(None, "undated", BTreeSet::new()),
        ImportedEntry::new(Some(date(2022, 5, 1)), "older", BTreeSet::new()),
        ImportedEntry::new(Some(date(2023, 5, 1)), "newer", BTreeSet::new()),
        ImportedEntry::new(Some(date(2022, 5, 1)), "older twin", BTreeSet::new()),
    ];
    sort_by_date_desc(&mut entries);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["newer", "older", "older twin", "undated"]);
    assert!(entries.windows(2).all(|w| match (w[0].date, w[1].date) {
        (Some(a), Some(b)) => a >= b,
        (None, Some(_)) => false,
        _ => true,
    }));
}
