use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use mhforms_core::models::category::SectionId;
use mhforms_core::models::entry::ImportedEntry;
use mhforms_core::models::note::ClinicalNote;
use mhforms_sections::section::SectionSpec;
use tracing::{debug, info};

use crate::error::AggregateError;
use crate::window::{dedup_fragments, filter_to_window, sort_by_date_desc};

/// Evidence buckets keyed by section, each already windowed, deduplicated
/// and sorted newest first.
pub type EntryBuckets = BTreeMap<SectionId, Vec<ImportedEntry>>;

/// Match every note against every section's keyword set in one pass.
///
/// `cancel` is polled before each note. Once it is set the partial buckets
/// are dropped and [`AggregateError::Cancelled`] is returned.
pub fn aggregate(
    notes: &[ClinicalNote],
    sections: &[SectionSpec],
    cancel: &AtomicBool,
) -> Result<EntryBuckets, AggregateError> {
    let mut buckets: EntryBuckets = sections
        .iter()
        .map(|s| (s.id.clone(), Vec::new()))
        .collect();

    for (processed, note) in notes.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            info!("import cancelled after {} of {} notes", processed, notes.len());
            return Err(AggregateError::Cancelled { processed });
        }
        for section in sections {
            let categories = section
                .keywords
                .categorize(&note.body, section.filter_false_positives);
            if categories.is_empty() {
                continue;
            }
            if let Some(bucket) = buckets.get_mut(&section.id) {
                bucket.push(ImportedEntry::new(note.date, note.body.clone(), categories));
            }
        }
    }

    for section in sections {
        let Some(bucket) = buckets.remove(&section.id) else {
            continue;
        };
        let matched = bucket.len();
        let windowed = match section.window {
            Some(window) => filter_to_window(bucket, window),
            None => bucket,
        };
        let mut entries = dedup_fragments(windowed);
        sort_by_date_desc(&mut entries);
        debug!(
            section = %section.id,
            matched,
            kept = entries.len(),
            "section bucket built"
        );
        buckets.insert(section.id.clone(), entries);
    }

    info!(
        "aggregated {} notes into {} sections ({} entries)",
        notes.len(),
        buckets.len(),
        buckets.values().map(Vec::len).sum::<usize>()
    );
    Ok(buckets)
}
