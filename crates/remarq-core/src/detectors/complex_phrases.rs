//! Complex phrase detection.
//!
//! Phrases are matched literally and case-sensitively against the sentence
//! text, not its words, so a phrase may also match inside a longer word
//! ("demonstrate" in "demonstrates"). Each phrase present counts once per
//! sentence, reported in lexicon order.

use crate::lexicon::Lexicon;

use super::{Finding, FindingKind};

/// Find every lexicon phrase that occurs in a sentence.
pub fn detect(sentence: &str, lexicon: &Lexicon) -> Vec<Finding> {
    let phrases = lexicon.complex_phrases();
    let mut present = vec![false; phrases.len()];

    for m in lexicon.phrase_matcher().find_overlapping_iter(sentence) {
        present[m.pattern().as_usize()] = true;
    }

    phrases
        .iter()
        .zip(present)
        .filter(|(_, found)| *found)
        .map(|(c, _)| Finding::new(FindingKind::ComplexPhrase, c.phrase.as_str()))
        .collect()
}
