use mhforms_core::error::CoreError;
use mhforms_core::models::category::{CategoryId, SectionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("unknown section '{section_id}' for form '{form_id}'")]
    UnknownSection {
        form_id: String,
        section_id: SectionId,
    },

    #[error("category '{0}' is defined more than once in a keyword set")]
    DuplicateCategory(CategoryId),

    #[error("category '{0}' has no keyword phrases")]
    EmptyCategory(CategoryId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("keyword set is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
