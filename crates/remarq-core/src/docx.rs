//! Paragraph text from `.docx` files.
//!
//! Only the main body (`word/document.xml`) is read. Every top-level `<w:p>`
//! becomes one paragraph, empty ones included; paragraphs inside tables are
//! skipped.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::DocumentResult;

const BODY_PART: &str = "word/document.xml";

/// Extract the body paragraphs of a `.docx` archive.
#[tracing::instrument(skip_all, fields(bytes = bytes.len()))]
pub fn paragraphs(bytes: &[u8]) -> DocumentResult<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(BODY_PART)?.read_to_string(&mut xml)?;
    let paragraphs = body_paragraphs(&xml)?;
    tracing::debug!(paragraphs = paragraphs.len(), "docx body read");
    Ok(paragraphs)
}

/// Walk WordprocessingML and collect paragraph text.
fn body_paragraphs(xml: &str) -> DocumentResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut table_depth = 0usize;
    let mut p_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" => {
                    p_depth += 1;
                    if p_depth == 1 {
                        current.clear();
                    }
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    if p_depth == 1 && table_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    p_depth = p_depth.saturating_sub(1);
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => {
                let in_paragraph = p_depth == 1 && table_depth == 0;
                match e.name().as_ref() {
                    b"w:p" if p_depth == 0 && table_depth == 0 => paragraphs.push(String::new()),
                    b"w:tab" if in_paragraph => current.push('\t'),
                    b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                    _ => {}
                }
            }
            Event::Text(t) if in_text && p_depth == 1 && table_depth == 0 => {
                current.push_str(&t.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
