//! In-memory collaborators
//!
//! Hash-map-backed provider and store for tests and embedded use. The
//! provider assigns sequential quote numbers from a [`Counter`] on
//! insert, the way the data layer does in production.

use crate::provider::{ProviderError, QuoteBundle, QuoteDataProvider, TemplateStore};
use quote_model::{Client, Counter, Quote, Template};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Quote storage backed by a hash map
#[derive(Debug, Default)]
pub struct InMemoryQuoteProvider {
    quotes: Mutex<HashMap<Uuid, QuoteBundle>>,
    counter: Counter,
}

impl InMemoryQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a quote, assigning the next sequential quote number.
    /// Returns the assigned number.
    pub fn insert(&self, mut quote: Quote, client: Option<Client>) -> u32 {
        quote.quote_number = self.counter.next("quote_number");
        let number = quote.quote_number;
        let mut quotes = self.quotes.lock().unwrap_or_else(|e| e.into_inner());
        quotes.insert(quote.id, QuoteBundle { quote, client });
        number
    }

    /// Store a quote keeping the number it already carries
    pub fn insert_with_number(&self, quote: Quote, client: Option<Client>) {
        let mut quotes = self.quotes.lock().unwrap_or_else(|e| e.into_inner());
        quotes.insert(quote.id, QuoteBundle { quote, client });
    }
}

impl QuoteDataProvider for InMemoryQuoteProvider {
    fn quote_with_client_and_items(
        &self,
        id: Uuid,
    ) -> Result<Option<QuoteBundle>, ProviderError> {
        let quotes = self.quotes.lock().unwrap_or_else(|e| e.into_inner());
        Ok(quotes.get(&id).cloned())
    }
}

/// Template storage with overwrite-on-same-name upload semantics
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: Mutex<HashMap<String, Template>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload a template; a previous upload under the same name is
    /// replaced
    pub fn upload(&self, template: Template) {
        let mut templates = self.templates.lock().unwrap_or_else(|e| e.into_inner());
        templates.insert(template.name.clone(), template);
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn template_by_name(&self, name: &str) -> Result<Option<Template>, ProviderError> {
        let templates = self.templates.lock().unwrap_or_else(|e| e.into_inner());
        Ok(templates.get(name).cloned())
    }
}
