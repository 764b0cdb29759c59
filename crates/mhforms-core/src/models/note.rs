use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single free-text clinical note. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalNote {
    pub date: Option<jiff::civil::Date>,
    pub body: String,
    /// Where the note came from (file name, sheet name, shared notes store).
    pub source: Option<String>,
}

impl ClinicalNote {
    pub fn new(date: Option<jiff::civil::Date>, body: impl Into<String>) -> Self {
        Self {
            date,
            body: body.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
