//! Qualifier detection.
//!
//! Some qualifiers only hedge when a pronoun owns them ("I think", "we will
//! try", "my opinion"); others hedge on their own ("perhaps", "maybe"). The
//! three-word form with a linker ("will", "was", "were", "don't") is checked
//! before the two-word form, and each qualifying word yields at most one
//! phrase.

use crate::lexicon::Lexicon;

use super::{Finding, FindingKind};

/// The qualifier phrase ending at `words[index]`, if there is one.
pub fn phrase_at(words: &[&str], index: usize, lexicon: &Lexicon) -> Option<String> {
    let word = *words.get(index)?;
    let pronouns = lexicon.qualifier_pronouns(&word.to_lowercase())?;

    if pronouns.is_empty() {
        return Some(word.to_string());
    }

    let allowed = |candidate: &str| {
        let lower = candidate.to_lowercase();
        pronouns.iter().any(|p| *p == lower)
    };

    let previous = *words.get(index.checked_sub(1)?)?;
    if lexicon.is_qualifier_linker(&previous.to_lowercase()) {
        // A linker needs its own pronoun; there is no two-word fallback.
        let owner = *words.get(index.checked_sub(2)?)?;
        return allowed(owner).then(|| format!("{owner} {previous} {word}"));
    }

    allowed(previous).then(|| format!("{previous} {word}"))
}

/// Find every qualifier phrase in a word list.
pub fn detect(words: &[&str], lexicon: &Lexicon) -> Vec<Finding> {
    (0..words.len())
        .filter_map(|i| phrase_at(words, i, lexicon))
        .map(|phrase| Finding::new(FindingKind::Qualifier, phrase))
        .collect()
}
