//! Quote render pipeline
//!
//! Orchestrates one export: fetch quote and template, build the
//! substitution context, render the document body, repack the archive,
//! derive the download filename.

use crate::context::build_render_context;
use crate::error::{ExportError, ExportResult};
use crate::provider::{QuoteDataProvider, TemplateStore};
use docx_template::{render_docx, DOCX_MIME};
use uuid::Uuid;

/// Logical name the quote template is uploaded under
pub const TEMPLATE_NAME: &str = "preventivo_template";

/// A rendered document ready to stream as a download
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

/// The render pipeline. Holds its two collaborators and nothing else;
/// rendering is read-only, so one renderer serves concurrent requests.
pub struct QuoteRenderer<P, S> {
    provider: P,
    store: S,
}

impl<P: QuoteDataProvider, S: TemplateStore> QuoteRenderer<P, S> {
    pub fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    /// Render the quote into a populated DOCX document.
    ///
    /// Fails without partial output: either the full document comes
    /// back, or a typed [`ExportError`] explains which step broke.
    pub fn render(&self, quote_id: Uuid) -> ExportResult<RenderedDocument> {
        let bundle = self
            .provider
            .quote_with_client_and_items(quote_id)?
            .ok_or(ExportError::QuoteNotFound(quote_id))?;

        let template = self
            .store
            .template_by_name(TEMPLATE_NAME)?
            .ok_or_else(|| ExportError::TemplateNotFound(TEMPLATE_NAME.to_string()))?;

        tracing::debug!(
            quote = %quote_id,
            number = bundle.quote.quote_number,
            items = bundle.quote.items.len(),
            "rendering quote"
        );

        let ctx = build_render_context(&bundle.quote, bundle.client.as_ref())?;
        let bytes = render_docx(&template.data, &ctx)?;

        let filename = derive_filename(
            bundle.quote.quote_number,
            bundle.client.as_ref().map(|c| c.company_name.as_str()),
        );
        tracing::info!(%filename, size = bytes.len(), "quote exported");

        Ok(RenderedDocument {
            bytes,
            filename,
            mime_type: DOCX_MIME,
        })
    }
}

/// `Preventivo_<number>_<company>.docx`, with every character outside
/// `[A-Za-z0-9]` in the company name replaced by `_`. Falls back to
/// `Cliente` when no usable company name exists.
fn derive_filename(quote_number: u32, company_name: Option<&str>) -> String {
    let company = match company_name {
        Some(name) if !name.trim().is_empty() => sanitize(name),
        _ => "Cliente".to_string(),
    };
    format!("Preventivo_{quote_number}_{company}.docx")
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
