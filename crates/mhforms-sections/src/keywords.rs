use std::collections::{BTreeSet, HashSet};

use mhforms_core::models::category::CategoryId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SectionError;

/// One category in a keyword set: its matching phrases and the phrases that
/// veto it when false-positive filtering is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryRule {
    pub id: CategoryId,
    pub label: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub false_positives: Vec<String>,
}

impl CategoryRule {
    /// Build a rule from static table data.
    pub fn from_static(
        id: &'static str,
        label: &str,
        keywords: &[&str],
        false_positives: &[&str],
    ) -> Self {
        Self {
            id: CategoryId::from_static(id),
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            false_positives: false_positives.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, lowered_text: &str) -> bool {
        contains_any(lowered_text, &self.keywords)
    }

    fn is_vetoed(&self, lowered_text: &str) -> bool {
        contains_any(lowered_text, &self.false_positives)
    }
}

fn contains_any(lowered_text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|phrase| {
        let phrase = phrase.trim().to_lowercase();
        !phrase.is_empty() && lowered_text.contains(&phrase)
    })
}

/// A per-domain mapping from category to matching phrases.
///
/// Rule order is the display order; matching is order-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKeywordSet {
    rules: Vec<CategoryRule>,
}

impl CategoryKeywordSet {
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self, SectionError> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    /// Load a caller-supplied keyword set from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, SectionError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), SectionError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(&rule.id) {
                return Err(SectionError::DuplicateCategory(rule.id.clone()));
            }
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(SectionError::EmptyCategory(rule.id.clone()));
            }
        }
        Ok(())
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.rules.iter().map(|r| &r.id)
    }

    pub fn label(&self, id: &CategoryId) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| &r.id == id)
            .map(|r| r.label.as_str())
    }

    /// Concatenate several sets. Later duplicates of an id are dropped.
    pub fn merged(sets: &[&CategoryKeywordSet]) -> Self {
        let mut seen = HashSet::new();
        let rules = sets
            .iter()
            .flat_map(|s| s.rules.iter())
            .filter(|r| seen.insert(r.id.clone()))
            .cloned()
            .collect();
        Self { rules }
    }

    /// Categories whose phrases occur in `text` (case-insensitive substring).
    ///
    /// With `filter_false_positives`, a category is dropped if any of its own
    /// false-positive phrases also occurs in `text`.
    pub fn categorize(&self, text: &str, filter_false_positives: bool) -> BTreeSet<CategoryId> {
        if text.trim().is_empty() {
            return BTreeSet::new();
        }
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .filter(|rule| !(filter_false_positives && rule.is_vetoed(&lowered)))
            .map(|rule| rule.id.clone())
            .collect()
    }
}

/// Free-function form of [`CategoryKeywordSet::categorize`].
pub fn categorize(
    text: &str,
    set: &CategoryKeywordSet,
    filter_false_positives: bool,
) -> BTreeSet<CategoryId> {
    set.categorize(text, filter_false_positives)
}
