//! Collaborator contracts
//!
//! The pipeline reads from two collaborators: a data provider that
//! returns a quote with its client and ordered items, and a template
//! store that returns uploaded template blobs by logical name. Both are
//! the only suspension points of a render; their failures propagate
//! with kind preserved.

use quote_model::{Client, Quote, Template};
use thiserror::Error;
use uuid::Uuid;

/// A quote together with its (possibly missing) client.
///
/// The client may be absent when the reference is dangling; the
/// pipeline renders empty strings for client fields in that case
/// instead of failing.
#[derive(Debug, Clone)]
pub struct QuoteBundle {
    pub quote: Quote,
    pub client: Option<Client>,
}

/// Failure inside a collaborator (connection lost, storage error, ...)
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProviderError(String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Read access to quotes
pub trait QuoteDataProvider {
    /// The quote by id with its client and items sorted by `sort_order`,
    /// or `None` when the id is unknown
    fn quote_with_client_and_items(
        &self,
        id: Uuid,
    ) -> Result<Option<QuoteBundle>, ProviderError>;
}

/// Read access to uploaded templates
pub trait TemplateStore {
    /// The template under the given logical name, or `None` when no
    /// upload happened yet
    fn template_by_name(&self, name: &str) -> Result<Option<Template>, ProviderError>;
}
