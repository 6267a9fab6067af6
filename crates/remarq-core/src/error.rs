//! Error types for remarq-core.
//!
//! Text analysis itself never fails; only loading its inputs can.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a [`crate::Lexicon`].
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The complex-phrase matcher could not be built.
    #[error("failed to build complex-phrase matcher: {0}")]
    PhraseMatcher(#[from] aho_corasick::BuildError),
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur while reading a [`crate::Document`] from bytes.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Text input is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// The file is not a readable `.docx` archive.
    #[error("invalid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Reading an archive entry failed.
    #[error("failed to read .docx entry: {0}")]
    Io(#[from] std::io::Error),

    /// The document body is not well-formed XML.
    #[error("invalid .docx body: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document body contains a bad character or entity reference.
    #[error("invalid .docx body: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
}

/// Result type alias using [`DocumentError`].
pub type DocumentResult<T> = Result<T, DocumentError>;
