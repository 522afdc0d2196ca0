//! Quote Export Pipeline
//!
//! Turns a quote record into a downloadable DOCX document. The pipeline
//! fetches the quote (with client and ordered items) from a
//! [`QuoteDataProvider`], fetches the uploaded template from a
//! [`TemplateStore`], builds the substitution context with
//! locale-formatted amounts and dates, and hands the result to the
//! `docx_template` engine.
//!
//! Rendering is read-only and synchronous: it never mutates the quote,
//! client, or template records, so concurrent renders need no
//! coordination. Any failure aborts the whole render; no partial
//! document is ever produced.
//!
//! The pipeline is transport-agnostic: the same [`QuoteRenderer`] serves
//! an HTTP handler, a job queue, or a CLI. The boundary layer maps
//! [`ExportError::http_status`] onto its own failure vocabulary.

mod context;
mod error;
mod format;
mod memory;
mod provider;
mod renderer;

pub use context::build_render_context;
pub use error::{ExportError, ExportResult};
pub use format::{format_currency, format_date};
pub use memory::{InMemoryQuoteProvider, InMemoryTemplateStore};
pub use provider::{ProviderError, QuoteBundle, QuoteDataProvider, TemplateStore};
pub use renderer::{QuoteRenderer, RenderedDocument, TEMPLATE_NAME};

// The MIME type travels with the rendered document
pub use docx_template::DOCX_MIME;
