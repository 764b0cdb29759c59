use mhforms_core::models::category::SectionId;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(
        "pattern '{earlier}' precedes the more specific '{later}' in category '{category}' and would shadow it"
    )]
    PriorityOrder {
        category: String,
        earlier: String,
        later: String,
    },
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("import cancelled after {processed} notes")]
    Cancelled { processed: usize },

    #[error("section not tracked by this session: {0}")]
    UnknownSection(SectionId),

    #[error("entry {entry_id} not found in section '{section_id}'")]
    UnknownEntry { section_id: SectionId, entry_id: Uuid },
}
