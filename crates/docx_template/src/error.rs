//! Error types for template rendering

use thiserror::Error;

/// Errors that can occur opening, rendering, or repacking a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The bytes are not a valid DOCX package, or a required entry
    /// (the document body) is missing or unreadable
    #[error("corrupt template archive: {0}")]
    ArchiveCorrupt(String),

    /// Tag syntax is broken: stray delimiter, empty tag, or unbalanced
    /// loop markers
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// A scalar tag references a key absent from every scope
    #[error("unresolved tag: {{{0}}}")]
    UnresolvedTag(String),

    /// IO error while repacking the archive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for TemplateError {
    fn from(err: zip::result::ZipError) -> Self {
        TemplateError::ArchiveCorrupt(err.to_string())
    }
}

/// Result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
