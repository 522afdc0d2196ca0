//! DOCX package reading and repacking
//!
//! A DOCX file is a ZIP archive; the visible text lives in the
//! `word/document.xml` entry. [`DocxPackage`] loads every entry into
//! memory, lets the engine swap the body, and re-serializes the archive
//! with a fixed timestamp so identical input produces identical bytes.

use crate::error::{TemplateError, TemplateResult};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Archive entry holding the document body text
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Archive entry declaring part content types
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// MIME type of the produced package
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A single file inside the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// An in-memory DOCX package: every entry, in archive order
#[derive(Debug, Clone)]
pub struct DocxPackage {
    entries: Vec<ArchiveEntry>,
}

impl DocxPackage {
    /// Open a DOCX package from raw bytes.
    ///
    /// Fails with [`TemplateError::ArchiveCorrupt`] if the bytes are not
    /// a ZIP archive or the document body entry is missing.
    pub fn open(bytes: &[u8]) -> TemplateResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)
                .map_err(|e| TemplateError::ArchiveCorrupt(format!("{}: {e}", file.name())))?;
            entries.push(ArchiveEntry {
                name: file.name().to_string(),
                data,
            });
        }
        let package = Self { entries };
        if !package.contains(DOCUMENT_PART) {
            return Err(TemplateError::ArchiveCorrupt(format!(
                "missing entry: {DOCUMENT_PART}"
            )));
        }
        Ok(package)
    }

    /// Assemble a package from raw parts (fixtures, programmatic builds)
    pub fn from_entries(entries: Vec<(String, Vec<u8>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, data)| ArchiveEntry { name, data })
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.data.as_slice())
    }

    pub fn entry_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// The document body as text
    pub fn body(&self) -> TemplateResult<&str> {
        let data = self.entry(DOCUMENT_PART).ok_or_else(|| {
            TemplateError::ArchiveCorrupt(format!("missing entry: {DOCUMENT_PART}"))
        })?;
        std::str::from_utf8(data).map_err(|e| {
            TemplateError::ArchiveCorrupt(format!("{DOCUMENT_PART} is not UTF-8: {e}"))
        })
    }

    /// Replace the document body text
    pub fn set_body(&mut self, xml: &str) {
        match self.entries.iter_mut().find(|e| e.name == DOCUMENT_PART) {
            Some(entry) => entry.data = xml.as_bytes().to_vec(),
            None => self.entries.push(ArchiveEntry {
                name: DOCUMENT_PART.to_string(),
                data: xml.as_bytes().to_vec(),
            }),
        }
    }

    /// Re-serialize the archive.
    ///
    /// Entries keep their original order and a fixed modification time,
    /// so the output is byte-deterministic for identical content.
    pub fn to_bytes(&self) -> TemplateResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        for entry in &self.entries {
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.data)?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_package() -> DocxPackage {
        DocxPackage::from_entries(vec![
            (CONTENT_TYPES_PART.to_string(), b"<Types/>".to_vec()),
            ("_rels/.rels".to_string(), b"<Relationships/>".to_vec()),
            (DOCUMENT_PART.to_string(), b"<w:t>ciao</w:t>".to_vec()),
            ("word/styles.xml".to_string(), b"<w:styles/>".to_vec()),
        ])
    }

    #[test]
    fn test_open_rejects_non_zip() {
        let err = DocxPackage::open(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, TemplateError::ArchiveCorrupt(_)));
    }

    #[test]
    fn test_open_requires_document_part() {
        let bytes = DocxPackage::from_entries(vec![(
            CONTENT_TYPES_PART.to_string(),
            b"<Types/>".to_vec(),
        )])
        .to_bytes()
        .unwrap();
        let err = DocxPackage::open(&bytes).unwrap_err();
        assert!(matches!(err, TemplateError::ArchiveCorrupt(msg) if msg.contains(DOCUMENT_PART)));
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let original = sample_package();
        let bytes = original.to_bytes().unwrap();
        let reopened = DocxPackage::open(&bytes).unwrap();

        assert_eq!(reopened.entry_names(), original.entry_names());
        for name in original.entry_names() {
            assert_eq!(reopened.entry(name), original.entry(name), "entry {name}");
        }
    }

    #[test]
    fn test_set_body_only_touches_document_part() {
        let mut package = sample_package();
        package.set_body("<w:t>nuovo</w:t>");
        assert_eq!(package.body().unwrap(), "<w:t>nuovo</w:t>");
        assert_eq!(package.entry("word/styles.xml"), Some(b"<w:styles/>".as_slice()));
        assert_eq!(package.entry("_rels/.rels"), Some(b"<Relationships/>".as_slice()));
    }

    #[test]
    fn test_output_is_deterministic() {
        let package = sample_package();
        let first = package.to_bytes().unwrap();
        let second = package.to_bytes().unwrap();
        assert_eq!(first, second);

        // And through a full reopen cycle
        let reopened = DocxPackage::open(&first).unwrap();
        assert_eq!(reopened.to_bytes().unwrap(), first);
    }

    #[test]
    fn test_body_requires_utf8() {
        let package = DocxPackage::from_entries(vec![(
            DOCUMENT_PART.to_string(),
            vec![0xff, 0xfe, 0x00],
        )]);
        let err = package.body().unwrap_err();
        assert!(matches!(err, TemplateError::ArchiveCorrupt(_)));
    }
}
