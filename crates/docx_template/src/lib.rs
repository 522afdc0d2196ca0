//! DOCX Template Engine
//!
//! Treats a DOCX file as what it is, a ZIP archive of XML parts, and
//! rewrites the document body by substituting `{tag}` placeholders from
//! a caller-supplied context. Two tag kinds are supported:
//!
//! - Scalar tags: `{ragione_sociale}` is replaced by the string form of
//!   the context value under that key.
//! - Loop tags: `{#articoli} ... {/articoli}` duplicates the enclosed
//!   region once per element of a list-valued key, resolving inner tags
//!   against each element's own context first and the ambient context
//!   as fallback.
//!
//! Substitution is strict: a tag that resolves nowhere fails the whole
//! render, so a bad template can never produce a document with
//! placeholder text baked in. All non-body archive entries pass through
//! byte-for-byte.
//!
//! # Example
//!
//! ```
//! use docx_template::{render, TagContext, TagValue};
//!
//! let mut ctx = TagContext::new();
//! ctx.set("nome", TagValue::text("Acme"));
//! let out = render("<w:t>Spett.le {nome}</w:t>", &ctx).unwrap();
//! assert_eq!(out, "<w:t>Spett.le Acme</w:t>");
//! ```

mod context;
mod engine;
mod error;
mod package;

pub use context::{TagContext, TagValue};
pub use engine::render;
pub use error::{TemplateError, TemplateResult};
pub use package::{ArchiveEntry, DocxPackage, CONTENT_TYPES_PART, DOCUMENT_PART, DOCX_MIME};

/// Substitute a context into a DOCX template and repack it.
///
/// Opens `template_bytes` as a DOCX package, renders the document body
/// against `ctx`, and returns the rebuilt archive. This is the whole
/// engine in one call; the pieces are available separately through
/// [`DocxPackage`] and [`render`].
pub fn render_docx(template_bytes: &[u8], ctx: &TagContext) -> TemplateResult<Vec<u8>> {
    let mut package = DocxPackage::open(template_bytes)?;
    let body = package.body()?.to_string();
    let rendered = render(&body, ctx)?;
    package.set_body(&rendered);
    package.to_bytes()
}
