//! mhforms-extract
//!
//! Deterministic extraction over a note corpus: diagnoses, medications,
//! temporal windowing and the per-section evidence aggregator.

pub mod aggregate;
pub mod diagnosis;
pub mod error;
pub mod medication;
pub mod session;
pub mod window;
