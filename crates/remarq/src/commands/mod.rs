//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use remarq_core::{Document, SourceFormat};

pub mod check;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;
pub mod suggest;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before anything is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<u8>> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read(path.as_std_path()).with_context(|| format!("cannot read file: {path}"))
}

/// Read a file into paragraphs.
///
/// Without an explicit format, the extension decides: `.md` and `.markdown`
/// are Markdown, `.docx` is Word, everything else is plain text.
pub fn load_document(
    path: &Utf8Path,
    format: Option<SourceFormat>,
    max_bytes: Option<usize>,
) -> anyhow::Result<Document> {
    let content = read_input_file(path, max_bytes)?;
    let format = format.unwrap_or_else(|| SourceFormat::from_path(path));
    tracing::debug!(file = %path, ?format, bytes = content.len(), "input loaded");
    Document::load(&content, format).with_context(|| format!("cannot read {path} as {format:?}"))
}
