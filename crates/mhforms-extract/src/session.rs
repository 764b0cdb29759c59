use std::sync::atomic::AtomicBool;

use mhforms_core::models::category::SectionId;
use mhforms_core::models::entry::ImportedEntry;
use mhforms_core::models::note::ClinicalNote;
use mhforms_sections::Form;
use mhforms_sections::section::SectionSpec;
use tracing::info;
use uuid::Uuid;

use crate::aggregate::{EntryBuckets, aggregate};
use crate::error::AggregateError;

/// Imported evidence for one form being filled in.
///
/// Every import replaces all tracked buckets at once; a failed or cancelled
/// import leaves the previous result in place.
#[derive(Debug, Clone)]
pub struct FormSession {
    sections: Vec<SectionSpec>,
    buckets: EntryBuckets,
}

impl FormSession {
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        let buckets = sections
            .iter()
            .map(|s| (s.id.clone(), Vec::new()))
            .collect();
        Self { sections, buckets }
    }

    pub fn for_form(form: &dyn Form) -> Self {
        Self::new(form.sections().to_vec())
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Aggregate `notes` and apply the result. Nothing changes on error.
    pub fn import(
        &mut self,
        notes: &[ClinicalNote],
        cancel: &AtomicBool,
    ) -> Result<(), AggregateError> {
        let buckets = aggregate(notes, &self.sections, cancel)?;
        self.apply(buckets);
        Ok(())
    }

    /// Replace every tracked bucket with the given result. Sections missing
    /// from `buckets` end up empty; untracked sections are ignored.
    pub fn apply(&mut self, mut buckets: EntryBuckets) {
        for section in &self.sections {
            let entries = buckets.remove(&section.id).unwrap_or_default();
            self.buckets.insert(section.id.clone(), entries);
        }
        info!(
            "applied import: {} entries across {} sections",
            self.buckets.values().map(Vec::len).sum::<usize>(),
            self.buckets.len()
        );
    }

    pub fn bucket(&self, section: &SectionId) -> Result<&[ImportedEntry], AggregateError> {
        self.buckets
            .get(section)
            .map(Vec::as_slice)
            .ok_or_else(|| AggregateError::UnknownSection(section.clone()))
    }

    /// Whether a section has no evidence. Untracked sections count as empty.
    pub fn is_empty(&self, section: &SectionId) -> bool {
        self.buckets.get(section).is_none_or(Vec::is_empty)
    }

    pub fn set_selected(
        &mut self,
        section: &SectionId,
        entry_id: Uuid,
        selected: bool,
    ) -> Result<(), AggregateError> {
        let bucket = self
            .buckets
            .get_mut(section)
            .ok_or_else(|| AggregateError::UnknownSection(section.clone()))?;
        let entry = bucket
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| AggregateError::UnknownEntry {
                section_id: section.clone(),
                entry_id,
            })?;
        entry.selected = selected;
        Ok(())
    }

    pub fn selected_entries(&self, section: &SectionId) -> Vec<&ImportedEntry> {
        self.buckets
            .get(section)
            .map(|bucket| bucket.iter().filter(|e| e.selected).collect())
            .unwrap_or_default()
    }
}
