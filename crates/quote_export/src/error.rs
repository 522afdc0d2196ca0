//! Error taxonomy for the export pipeline
//!
//! Every failure is terminal for the render attempt; nothing is retried
//! here. Collaborator lookups keep their kind; engine failures arrive
//! wrapped with the tag or entry that caused them.

use crate::provider::ProviderError;
use docx_template::TemplateError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can abort a quote render
#[derive(Debug, Error)]
pub enum ExportError {
    /// The quote id is unknown to the data provider
    #[error("quote not found: {0}")]
    QuoteNotFound(Uuid),

    /// The named template has not been uploaded yet
    #[error("template '{0}' not found: upload preventivo_template.docx before exporting")]
    TemplateNotFound(String),

    /// Corrupt archive, malformed tags, or an unresolved tag
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Invalid numeric input for display formatting
    #[error("formatting error: {0}")]
    Formatting(String),

    /// A collaborator failed for reasons of its own
    #[error("data access error: {0}")]
    Provider(#[from] ProviderError),
}

impl ExportError {
    /// HTTP status the boundary layer should map this failure to:
    /// missing records are 404, bad templates are 400, the rest is 500.
    pub fn http_status(&self) -> u16 {
        match self {
            ExportError::QuoteNotFound(_) | ExportError::TemplateNotFound(_) => 404,
            ExportError::Template(
                TemplateError::ArchiveCorrupt(_)
                | TemplateError::MalformedTemplate(_)
                | TemplateError::UnresolvedTag(_),
            ) => 400,
            ExportError::Template(TemplateError::Io(_))
            | ExportError::Formatting(_)
            | ExportError::Provider(_) => 500,
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
