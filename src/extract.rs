//! Document text extraction.
//!
//! Reads plain-text and PDF files from disk. Uses pdf-extract for PDFs.
//! Scanned (image-only) PDFs carry no text layer and come back empty.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Extensions accepted for analysis
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// Default upload ceiling: 10 MiB
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file type not allowed: {0}. Upload a PDF or TXT")]
    UnsupportedType(String),
    #[error("file is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("failed to extract PDF text: {0}")]
    PdfError(String),
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Detect the kind from a file name's extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" => Ok(Self::Text),
            _ => Err(ExtractError::UnsupportedType(path.display().to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Raw text pulled out of a document
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// File name without directories
    pub filename: String,
    pub kind: DocumentKind,
    /// Unprocessed text, before whitespace normalisation
    pub text: String,
}

/// Read a document from disk, enforcing the type allowlist and size limit
pub fn read_document(path: &Path, max_bytes: u64) -> Result<ExtractedDocument, ExtractError> {
    let kind = DocumentKind::from_path(path)?;

    let read_error = |source| ExtractError::ReadError {
        path: path.display().to_string(),
        source,
    };

    let size = std::fs::metadata(path).map_err(read_error)?.len();
    if size > max_bytes {
        return Err(ExtractError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(read_error)?;
    let text = match kind {
        DocumentKind::Text => decode_text(&bytes),
        DocumentKind::Pdf => extract_pdf_text(&bytes)?,
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::info!(%filename, %kind, bytes = size, chars = text.chars().count(), "extracted document");

    Ok(ExtractedDocument {
        filename,
        kind,
        text,
    })
}

/// Decode UTF-8, dropping invalid byte sequences
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Extract the text layer of an in-memory PDF
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::PdfError(e.to_string()))
}
