//! mhforms-core
//!
//! Pure domain types and clinical date conventions. No I/O: this is the
//! shared vocabulary of the notes-to-forms pipeline.

pub mod dates;
pub mod error;
pub mod models;
