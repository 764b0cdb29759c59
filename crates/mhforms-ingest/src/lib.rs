//! mhforms-ingest
//!
//! Turns a clinical document into normalized text, dated notes and
//! best-effort demographics.

pub mod error;
pub mod formats;
pub mod patient;
pub mod segment;

use std::path::Path;

use mhforms_core::models::document::ExtractedDocument;
use tracing::{debug, info};

use error::IngestError;

/// Read and ingest a file. The extension picks the extractor.
pub fn ingest_path(path: &Path) -> Result<ExtractedDocument, IngestError> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    ingest_bytes(&bytes, filename)
}

/// Ingest an in-memory document. `filename` supplies the extension and is
/// recorded as each note's source.
pub fn ingest_bytes(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, IngestError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = formats::source_format_for_extension(ext).ok_or_else(|| {
        IngestError::UnsupportedFormat(if ext.is_empty() {
            filename.to_string()
        } else {
            ext.to_string()
        })
    })?;

    let raw = formats::extract_text(bytes, format)?;
    let raw_text = segment::normalize_text(&raw);
    let notes = segment::segment_notes(&raw_text, Some(filename));
    let latest = notes.iter().filter_map(|n| n.date).max();
    let patient_info = patient::extract_patient_info(&raw_text, latest);

    let document = ExtractedDocument {
        format,
        raw_text,
        notes,
        patient_info,
    };
    info!(
        filename,
        format = ?document.format,
        notes = document.notes.len(),
        dated = document.notes.iter().filter(|n| n.date.is_some()).count(),
        "document ingested"
    );
    if document.is_partial() {
        debug!(missing = ?document.patient_info.missing_fields(), "partial demographics");
    }
    Ok(document)
}
