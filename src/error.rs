// File: src/error.rs
use crate::core::types::CodepointInterval;

/// Settings reference data that is absent from the bundled Unicode tables.
/// Usually means the persisted document was written against other tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurityError {
    #[error("Block doesn't belong to any codepoint plane: {0}")]
    UnknownPlane(CodepointInterval),

    #[error("Block doesn't exist within a plane: {0}")]
    UnknownBlock(CodepointInterval),

    #[error("Codepoint category group doesn't exist: {0}")]
    UnknownCategoryGroup(String),

    #[error("Codepoint category doesn't exist within its group: {0}")]
    UnknownCategory(String),

    #[error("Filter doesn't match the Unicode reference data: {0}")]
    FilterMismatch(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[derive(Debug, thiserror::Error)]
pub enum UcdError {
    #[error("Malformed UnicodeData line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Unpaired range entry at line {0}")]
    UnpairedRange(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configurity(#[from] ConfigurityError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Ucd(#[from] UcdError),
}

pub type Result<T> = std::result::Result<T, Error>;
