//! Markdown input.
//!
//! Reduces a Markdown document to its prose paragraphs with pulldown-cmark.
//! Code blocks, inline code, headings, tables and YAML frontmatter are
//! dropped; link text, emphasis, blockquotes and list items are kept as
//! plain text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extract prose paragraphs from Markdown.
///
/// Paragraphs come back in document order, separated by empty strings so
/// they render with a blank line between them. Soft and hard line breaks
/// inside a paragraph become single spaces.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn prose_paragraphs(text: &str) -> Vec<String> {
    let text = strip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut skip_depth: usize = 0;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => current.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => current.push(' '),

            // Tight list items carry no paragraph events; a nested list
            // ends the text of its parent item.
            Event::Start(Tag::List(_))
            | Event::End(TagEnd::Paragraph | TagEnd::Item)
                if skip_depth == 0 =>
            {
                flush(&mut paragraphs, &mut current);
            }
            _ => {}
        }
    }
    flush(&mut paragraphs, &mut current);

    paragraphs
}

fn flush(paragraphs: &mut Vec<String>, current: &mut String) {
    let paragraph = current.trim();
    if !paragraph.is_empty() {
        if !paragraphs.is_empty() {
            paragraphs.push(String::new());
        }
        paragraphs.push(paragraph.to_string());
    }
    current.clear();
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
