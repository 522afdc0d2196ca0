//! Uploaded template blobs
//!
//! A template is a named binary blob versioned by overwrite: uploading
//! under an existing name replaces the previous bytes. The export
//! pipeline treats the bytes as opaque input fetched by logical name.

use serde::{Deserialize, Serialize};

/// An uploaded document template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Logical name the export pipeline fetches by (unique)
    pub name: String,
    /// Original upload filename
    pub filename: String,
    /// Raw package bytes
    #[serde(skip)]
    pub data: Vec<u8>,
    pub mimetype: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: Vec<u8>,
        mimetype: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            data,
            mimetype: mimetype.into(),
        }
    }
}
