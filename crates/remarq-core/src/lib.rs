//! Core library for remarq.
//!
//! Analyzes prose for readability and style: sentences that are hard to
//! read, adverbs, qualifiers, passive voice, cliché openers and wordy
//! phrases. Text goes in as a list of paragraphs; annotated paragraphs and
//! a [`Statistics`] record come out.
//!
//! # Modules
//!
//! - [`text`] - Sentence splitting, letters and words
//! - [`readability`] - Reading level and readability tier
//! - [`lexicon`], [`word_lists`] - Word and phrase tables
//! - [`detectors`] - Adverb, qualifier, passive voice, complex phrase and
//!   opener detectors
//! - [`annotate`] - Per-sentence annotation with non-overlapping markers
//! - [`markers`] - Marker codes and the sentinel-symbol codec
//! - [`statistics`] - Mergeable document counters
//! - [`processor`] - Whole-document processing
//! - [`document`], [`markdown`], [`docx`] - Plain text, Markdown and `.docx` input
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use remarq_core::{Document, process};
//!
//! let doc = Document::from_plain_text("I think we should leave.\n");
//! let result = process(doc.paragraphs());
//!
//! assert_eq!(result.statistics.qualifiers, 1);
//! assert_eq!(result.paragraphs[0], " \x1b[36mI think\x1b[0m we should leave.");
//! ```
#![deny(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod detectors;
pub mod docx;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod markdown;
pub mod markers;
pub mod processor;
pub mod readability;
pub mod statistics;
pub mod text;
pub mod word_lists;

pub use annotate::{AnnotatedSentence, Annotator};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use detectors::{Finding, FindingKind};
pub use document::{Document, SourceFormat};
pub use error::{
    ConfigError, ConfigResult, DocumentError, DocumentResult, LexiconError, LexiconResult,
};
pub use lexicon::{ComplexPhrase, Lexicon};
pub use markers::Marker;
pub use processor::{FindingRecord, ProcessedDocument, Processor, process};
pub use readability::{ReadabilityTier, SentenceScore};
pub use statistics::Statistics;
