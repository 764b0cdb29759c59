use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::note::ClinicalNote;
use crate::models::patient::PatientInfo;

/// The file format a document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SourceFormat {
    PlainText,
    Pdf,
    Docx,
    Spreadsheet,
    Csv,
}

/// Result of ingesting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractedDocument {
    pub format: SourceFormat,
    pub raw_text: String,
    pub notes: Vec<ClinicalNote>,
    pub patient_info: PatientInfo,
}

impl ExtractedDocument {
    /// True when some demographic fields could not be inferred. This is a
    /// signal, not a failure.
    pub fn is_partial(&self) -> bool {
        !self.patient_info.missing_fields().is_empty()
    }
}
