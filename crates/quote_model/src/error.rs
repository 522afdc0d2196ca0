//! Error types for the quote model

use thiserror::Error;

/// Validation errors raised by model mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Line items must carry a non-empty description
    #[error("item description must not be empty")]
    EmptyDescription,

    /// Item lookup by id failed
    #[error("item not found: {0}")]
    ItemNotFound(uuid::Uuid),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
