use mhforms_core::models::category::SectionId;
use mhforms_core::models::lookback::Lookback;
use serde::{Deserialize, Serialize};

use crate::keywords::CategoryKeywordSet;

/// A form section that collects evidence from notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: SectionId,
    pub label: String,
    pub keywords: CategoryKeywordSet,
    pub filter_false_positives: bool,
    /// Only keep evidence this close to the bucket's latest entry.
    /// `None` keeps the whole history.
    pub window: Option<Lookback>,
}

impl SectionSpec {
    pub fn new(id: &'static str, label: &str, keywords: CategoryKeywordSet) -> Self {
        Self {
            id: SectionId::from_static(id),
            label: label.to_string(),
            keywords,
            filter_false_positives: true,
            window: None,
        }
    }

    pub fn with_window(mut self, window: Lookback) -> Self {
        self.window = Some(window);
        self
    }

    pub fn without_false_positive_filter(mut self) -> Self {
        self.filter_false_positives = false;
        self
    }
}
