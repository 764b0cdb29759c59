//! Temporal windowing, deduplication and ordering of dated fragments.
//!
//! The window reference is always the latest date inside the collection
//! being filtered, never the wall clock.

use std::cmp::Reverse;
use std::collections::HashSet;

use jiff::civil::Date;
use mhforms_core::models::entry::ImportedEntry;
use mhforms_core::models::lookback::Lookback;
use mhforms_core::models::note::ClinicalNote;

/// Number of leading characters compared when deduplicating fragments.
pub const DEDUP_PREFIX_CHARS: usize = 200;

/// Anything with an optional date and a body of text.
pub trait Dated {
    fn date(&self) -> Option<Date>;
    fn text(&self) -> &str;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> Option<Date> {
        (**self).date()
    }

    fn text(&self) -> &str {
        (**self).text()
    }
}

impl Dated for ClinicalNote {
    fn date(&self) -> Option<Date> {
        self.date
    }

    fn text(&self) -> &str {
        &self.body
    }
}

impl Dated for ImportedEntry {
    fn date(&self) -> Option<Date> {
        self.date
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Latest date in the collection, if any item is dated.
pub fn reference_date<T: Dated>(items: &[T]) -> Option<Date> {
    items.iter().filter_map(Dated::date).max()
}

/// Keep items dated within `lookback` of the collection's latest date.
/// Undated items are always kept.
pub fn filter_to_window<T: Dated>(items: Vec<T>, lookback: Lookback) -> Vec<T> {
    match reference_date(&items) {
        Some(reference) => filter_with_reference(items, lookback, reference),
        None => items,
    }
}

/// Like [`filter_to_window`] with an explicit reference date.
pub fn filter_with_reference<T: Dated>(items: Vec<T>, lookback: Lookback, reference: Date) -> Vec<T> {
    let cutoff = lookback.cutoff(reference);
    items
        .into_iter()
        .filter(|item| item.date().is_none_or(|d| d >= cutoff))
        .collect()
}

fn dedup_key(text: &str) -> String {
    text.chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect::<String>()
        .to_lowercase()
}

/// Drop fragments whose lowercase 200-character prefix was already seen.
/// The first occurrence wins.
pub fn dedup_fragments<T: Dated>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(dedup_key(item.text())))
        .collect()
}

/// Newest first; undated items last. Stable for equal dates.
pub fn sort_by_date_desc<T: Dated>(items: &mut [T]) {
    items.sort_by_key(|item| Reverse(item.date()));
}
