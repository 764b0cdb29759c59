use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid slug '{0}': expected lowercase ascii letters, digits and underscores")]
    InvalidSlug(String),

    #[error("unknown ICD-10 code: {0}")]
    UnknownDiagnosisCode(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),
}
