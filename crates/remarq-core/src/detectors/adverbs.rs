//! Adverb detection.

use crate::lexicon::Lexicon;

use super::{Finding, FindingKind};

/// Whether a word reads as an adverb: ends in `-ly` and is not a known
/// exception such as "family" or "only".
pub fn is_adverb(word: &str, lexicon: &Lexicon) -> bool {
    let lower = word.to_lowercase();
    lower.ends_with("ly") && !lexicon.is_non_adverb(&lower)
}

/// Find every adverb in a word list, one finding per occurrence.
pub fn detect(words: &[&str], lexicon: &Lexicon) -> Vec<Finding> {
    words
        .iter()
        .filter(|w| is_adverb(w, lexicon))
        .map(|w| Finding::new(FindingKind::Adverb, *w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn adverbs_in(sentence: &str) -> Vec<String> {
        detect(&text::words(sentence), Lexicon::builtin())
            .into_iter()
            .map(|f| f.text)
            .collect()
    }

    #[test]
    fn detects_ly_words() {
        assert_eq!(
            adverbs_in("She ran quickly and spoke softly."),
            vec!["quickly", "softly"]
        );
    }

    #[test]
    fn exceptions_are_not_adverbs() {
        assert!(adverbs_in("My family only meets early.").is_empty());
    }

    #[test]
    fn usually_is_never_an_adverb() {
        assert!(adverbs_in("She usually walks home.").is_empty());
        assert!(adverbs_in("Usually, yes.").is_empty());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(adverbs_in("Suddenly it rained."), vec!["Suddenly"]);
    }

    #[test]
    fn repeated_adverbs_are_separate_findings() {
        assert_eq!(adverbs_in("Slowly, slowly."), vec!["Slowly", "slowly"]);
    }

    #[test]
    fn idempotent_on_the_same_sentence() {
        let words = text::words("He clearly and truly meant it.");
        let first = detect(&words, Lexicon::builtin());
        let second = detect(&words, Lexicon::builtin());
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
