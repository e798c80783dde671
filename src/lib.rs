//! # docsumma
//!
//! A CLI for extractive summarisation of PDF and plain-text documents.
//!
//! ## Features
//!
//! - **Extractive summaries**: sentences scored by word frequency, kept verbatim in document order
//! - **Study questions**: templated questions built around the most frequent terms
//! - **Local only**: PDF text layers via pdf-extract, no network or model calls

pub mod analysis;
pub mod config;
pub mod extract;
pub mod frequency;
pub mod logging;
pub mod questions;
pub mod summary;
pub mod text;

pub use analysis::{analyse, Analysis, AnalysisError};
pub use config::Config;
pub use extract::{read_document, DocumentKind, ExtractedDocument};
pub use questions::generate_questions;
pub use summary::summarize;
