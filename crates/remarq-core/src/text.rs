//! Text processing utilities.
//!
//! Splits paragraphs into sentences and sentences into letters and words.
//! Word boundaries defined here are shared by every detector, and word order
//! matters: several detectors look at the words *preceding* a match.

use regex::Regex;
use std::sync::LazyLock;

/// A sentence: a capital letter up to the first `.`, `!` or `?`.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][^.!?]*[.!?]").expect("valid regex"));

/// A word: letters, digits, underscores, apostrophes, slashes and hyphens.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w'/-]+").expect("valid regex"));

/// Split a paragraph into sentences.
///
/// Every match of the sentence pattern becomes one sentence. When nothing
/// matches (no capital letter followed by terminal punctuation), the whole
/// paragraph is treated as a single sentence. Text between or after matches
/// belongs to no sentence.
#[tracing::instrument(skip_all, fields(paragraph_len = paragraph.len()))]
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let sentences: Vec<&str> = SENTENCE_PATTERN
        .find_iter(paragraph)
        .map(|m| m.as_str())
        .collect();

    if sentences.is_empty() {
        return vec![paragraph];
    }
    sentences
}

/// All ASCII letters of a sentence, in order.
pub fn letters(sentence: &str) -> Vec<char> {
    sentence.chars().filter(char::is_ascii_alphabetic).collect()
}

/// All words of a sentence, in order of appearance.
pub fn words(sentence: &str) -> Vec<&str> {
    WORD_PATTERN
        .find_iter(sentence)
        .map(|m| m.as_str())
        .collect()
}

/// Whether a paragraph holds nothing to analyze.
pub fn is_blank(paragraph: &str) -> bool {
    paragraph.trim().is_empty()
}
