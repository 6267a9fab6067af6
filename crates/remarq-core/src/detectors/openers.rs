//! Cliché sentence opener detection.

use crate::lexicon::Lexicon;

use super::{Finding, FindingKind};

/// Report the first lexicon opener the sentence starts with.
///
/// Openers are compared case-sensitively and in lexicon order, so "It is"
/// wins over "It is clear that". At most one opener is reported.
pub fn detect(sentence: &str, lexicon: &Lexicon) -> Vec<Finding> {
    lexicon
        .openers()
        .iter()
        .find(|opener| sentence.starts_with(opener.as_str()))
        .map(|opener| Finding::at_start(FindingKind::BadOpener, opener.as_str()))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::Anchor;

    fn openers_in(sentence: &str) -> Vec<String> {
        detect(sentence, Lexicon::builtin())
            .into_iter()
            .map(|f| f.text)
            .collect()
    }

    #[test]
    fn detects_opener() {
        assert_eq!(openers_in("Obviously we are late."), vec!["Obviously"]);
        assert_eq!(openers_in("There are two options."), vec!["There are"]);
    }

    #[test]
    fn first_listed_opener_wins() {
        assert_eq!(openers_in("It is clear that we won."), vec!["It is"]);
    }

    #[test]
    fn only_at_sentence_start() {
        assert!(openers_in("We know it is late.").is_empty());
    }

    #[test]
    fn case_sensitive() {
        assert!(openers_in("obviously not.").is_empty());
    }

    #[test]
    fn trailing_space_is_part_of_the_opener() {
        assert_eq!(openers_in("Yes, we can."), vec!["Yes, "]);
        assert!(openers_in("Yes.").is_empty());
    }

    #[test]
    fn anchored_at_start() {
        let found = detect("Anyway, moving on.", Lexicon::builtin());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].anchor, Anchor::SentenceStart);
    }
}
