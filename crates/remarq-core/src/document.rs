//! Input documents.

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::docx;
use crate::error::DocumentResult;
use crate::markdown;

/// How a source file is read into paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SourceFormat {
    /// One paragraph per line.
    #[default]
    PlainText,
    /// Prose paragraphs of a Markdown document.
    Markdown,
    /// Body paragraphs of a Word `.docx` file.
    Docx,
}

impl SourceFormat {
    /// Pick a format from a file extension: `.md` and `.markdown` are
    /// Markdown, `.docx` is Word, anything else is plain text.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("md" | "markdown") => Self::Markdown,
            Some("docx") => Self::Docx,
            _ => Self::PlainText,
        }
    }
}

/// An ordered list of paragraphs. Empty strings mark paragraph breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<String>,
}

impl Document {
    /// Wrap paragraphs as they are.
    pub const fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// Every line is a paragraph, trimmed of surrounding whitespace.
    pub fn from_plain_text(text: &str) -> Self {
        Self::new(text.lines().map(|line| line.trim().to_string()).collect())
    }

    /// Prose paragraphs of a Markdown document.
    pub fn from_markdown(text: &str) -> Self {
        Self::new(markdown::prose_paragraphs(text))
    }

    /// Body paragraphs of a `.docx` file, untrimmed.
    pub fn from_docx(bytes: &[u8]) -> DocumentResult<Self> {
        docx::paragraphs(bytes).map(Self::new)
    }

    /// Read file contents in the given format.
    ///
    /// Text formats must be UTF-8.
    pub fn load(bytes: &[u8], format: SourceFormat) -> DocumentResult<Self> {
        match format {
            SourceFormat::PlainText => Ok(Self::from_plain_text(std::str::from_utf8(bytes)?)),
            SourceFormat::Markdown => Ok(Self::from_markdown(std::str::from_utf8(bytes)?)),
            SourceFormat::Docx => Self::from_docx(bytes),
        }
    }

    /// The paragraphs, in order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Take the paragraphs.
    pub fn into_paragraphs(self) -> Vec<String> {
        self.paragraphs
    }

    /// Whether there are no paragraphs at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl From<Vec<String>> for Document {
    fn from(paragraphs: Vec<String>) -> Self {
        Self::new(paragraphs)
    }
}
