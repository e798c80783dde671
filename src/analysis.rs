//! Runs the text pipeline over an extracted document.
//!
//! clean → length guard → summary + questions.

use crate::config::AnalysisConfig;
use crate::extract::{DocumentKind, ExtractedDocument};
use crate::questions::generate_questions;
use crate::summary::summarize;
use crate::text::normalize;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Clean text shorter than this is not analysed
pub const DEFAULT_MIN_TEXT_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Extracted text is too short. If it's a scanned PDF, text extraction may not work.")]
    TextTooShort { chars: usize, min: usize },
}

/// Result of analysing one document
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub filename: String,
    pub kind: DocumentKind,
    /// Length of the cleaned text in characters
    pub characters: usize,
    pub summary: String,
    pub questions: Vec<String>,
    pub analysed_at: DateTime<Utc>,
}

/// Normalise raw text and reject it when it is too short to analyse
pub fn prepare_text(raw: &str, min_chars: usize) -> Result<String, AnalysisError> {
    let clean = normalize(raw);
    let chars = clean.chars().count();
    if chars < min_chars {
        tracing::warn!(chars, min = min_chars, "extracted text below analysis threshold");
        return Err(AnalysisError::TextTooShort {
            chars,
            min: min_chars,
        });
    }
    Ok(clean)
}

/// Summarise and question an extracted document
pub fn analyse(doc: &ExtractedDocument, settings: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    let clean = prepare_text(&doc.text, settings.min_text_chars)?;
    let characters = clean.chars().count();

    let summary = summarize(&clean, settings.summary_sentences);
    let questions = generate_questions(&clean, settings.max_questions);

    tracing::info!(
        filename = %doc.filename,
        chars = characters,
        questions = questions.len(),
        "analysed document"
    );

    Ok(Analysis {
        filename: doc.filename.clone(),
        kind: doc.kind,
        characters,
        summary,
        questions,
        analysed_at: Utc::now(),
    })
}
