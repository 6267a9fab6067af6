//! Passive voice detection.
//!
//! A word ending in `-ed` right after a form of "to be" is reported as a
//! passive construction. The rule is purely suffix-based: irregular
//! participles such as "written" are not caught.

use crate::lexicon::Lexicon;

use super::{Finding, FindingKind};

/// The passive phrase ending at `words[index]`, if there is one.
///
/// The first word of a sentence has no trigger before it and never matches.
pub fn phrase_at(words: &[&str], index: usize, lexicon: &Lexicon) -> Option<String> {
    let word = *words.get(index)?;
    if !word.to_lowercase().ends_with("ed") {
        return None;
    }

    let trigger = *words.get(index.checked_sub(1)?)?;
    lexicon
        .is_passive_trigger(&trigger.to_lowercase())
        .then(|| format!("{trigger} {word}"))
}

/// Find every passive construction in a word list.
pub fn detect(words: &[&str], lexicon: &Lexicon) -> Vec<Finding> {
    (0..words.len())
        .filter_map(|i| phrase_at(words, i, lexicon))
        .map(|phrase| Finding::new(FindingKind::PassiveVoice, phrase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn passives_in(sentence: &str) -> Vec<String> {
        detect(&text::words(sentence), Lexicon::builtin())
            .into_iter()
            .map(|f| f.text)
            .collect()
    }

    #[test]
    fn detects_simple_passive() {
        assert_eq!(passives_in("The cake was baked by Mom."), vec!["was baked"]);
    }

    #[test]
    fn detects_multiple_passive() {
        assert_eq!(
            passives_in("It is finished and they were rewarded."),
            vec!["is finished", "were rewarded"]
        );
    }

    #[test]
    fn suffix_rule_only() {
        assert!(passives_in("This is a well written sentence.").is_empty());
        assert!(passives_in("The report was written.").is_empty());
    }

    #[test]
    fn requires_a_trigger() {
        assert!(passives_in("She baked a cake.").is_empty());
    }

    #[test]
    fn first_word_never_matches() {
        // the last word is a trigger; it must not wrap around to the first
        assert!(passives_in("Finished tasks are.").is_empty());
    }

    #[test]
    fn trigger_case_is_ignored() {
        assert_eq!(passives_in("Was it? Been tired."), vec!["Been tired"]);
    }
}
