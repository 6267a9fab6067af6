//! Document statistics.
//!
//! A [`Statistics`] value is owned by one processing pass. Counters only
//! grow during the pass, and two values from separate passes combine by
//! field-wise addition, so work can be split and summed in any order.

use std::ops::{Add, AddAssign};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detectors::FindingKind;
use crate::readability::{ReadabilityTier, SentenceScore};

/// Aggregate counters for an analyzed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    /// Paragraphs with any non-whitespace text.
    pub total_paragraphs: usize,
    /// Sentences analyzed.
    pub total_sentences: usize,
    /// Words across all sentences.
    pub total_words: usize,
    /// Characters across all sentences.
    pub total_characters: usize,
    /// ASCII letters across all sentences.
    pub total_letters: usize,
    /// Sentences classified as hard to read.
    pub hard_sentences: usize,
    /// Sentences classified as very hard to read.
    pub very_hard_sentences: usize,
    /// Adverbs found.
    pub adverbs: usize,
    /// Qualifiers found.
    pub qualifiers: usize,
    /// Passive constructions found.
    pub passive_voice: usize,
    /// Cliché sentence openers found.
    pub bad_openers: usize,
    /// Complex phrases found.
    pub complex_phrases: usize,
}

impl Statistics {
    /// Count one finding.
    pub const fn record(&mut self, kind: FindingKind) {
        let counter = match kind {
            FindingKind::Adverb => &mut self.adverbs,
            FindingKind::Qualifier => &mut self.qualifiers,
            FindingKind::PassiveVoice => &mut self.passive_voice,
            FindingKind::ComplexPhrase => &mut self.complex_phrases,
            FindingKind::BadOpener => &mut self.bad_openers,
        };
        *counter += 1;
    }

    /// Count one sentence and its measurements.
    pub const fn record_sentence(&mut self, score: &SentenceScore) {
        self.total_sentences += 1;
        self.total_words += score.words;
        self.total_characters += score.characters;
        self.total_letters += score.letters;
        match score.tier {
            ReadabilityTier::Normal => {}
            ReadabilityTier::Hard => self.hard_sentences += 1,
            ReadabilityTier::VeryHard => self.very_hard_sentences += 1,
        }
    }

    /// Add another pass's counters to this one.
    pub const fn merge(&mut self, other: &Self) {
        self.total_paragraphs += other.total_paragraphs;
        self.total_sentences += other.total_sentences;
        self.total_words += other.total_words;
        self.total_characters += other.total_characters;
        self.total_letters += other.total_letters;
        self.hard_sentences += other.hard_sentences;
        self.very_hard_sentences += other.very_hard_sentences;
        self.adverbs += other.adverbs;
        self.qualifiers += other.qualifiers;
        self.passive_voice += other.passive_voice;
        self.bad_openers += other.bad_openers;
        self.complex_phrases += other.complex_phrases;
    }

    /// Counter for one finding kind.
    pub const fn findings(&self, kind: FindingKind) -> usize {
        match kind {
            FindingKind::Adverb => self.adverbs,
            FindingKind::Qualifier => self.qualifiers,
            FindingKind::PassiveVoice => self.passive_voice,
            FindingKind::ComplexPhrase => self.complex_phrases,
            FindingKind::BadOpener => self.bad_openers,
        }
    }

    /// All counters as `(name, value)` pairs, in declaration order.
    pub const fn counters(&self) -> [(&'static str, usize); 12] {
        [
            ("total_paragraphs", self.total_paragraphs),
            ("total_sentences", self.total_sentences),
            ("total_words", self.total_words),
            ("total_characters", self.total_characters),
            ("total_letters", self.total_letters),
            ("hard_sentences", self.hard_sentences),
            ("very_hard_sentences", self.very_hard_sentences),
            ("adverbs", self.adverbs),
            ("qualifiers", self.qualifiers),
            ("passive_voice", self.passive_voice),
            ("bad_openers", self.bad_openers),
            ("complex_phrases", self.complex_phrases),
        ]
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for Statistics {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for Statistics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability;

    #[test]
    fn starts_at_zero() {
        assert!(Statistics::default().counters().iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn record_maps_each_kind_to_its_counter() {
        let mut stats = Statistics::default();
        stats.record(FindingKind::Adverb);
        stats.record(FindingKind::Adverb);
        stats.record(FindingKind::BadOpener);
        stats.record(FindingKind::ComplexPhrase);
        assert_eq!(stats.adverbs, 2);
        assert_eq!(stats.bad_openers, 1);
        assert_eq!(stats.complex_phrases, 1);
        assert_eq!(stats.findings(FindingKind::Qualifier), 0);
    }

    #[test]
    fn record_sentence_accumulates() {
        let mut stats = Statistics::default();
        stats.record_sentence(&readability::score("I think we should leave."));
        stats.record_sentence(&readability::score(
            "Obviously, this is a well written sentence that clearly demonstrates \
             how one might ramble on unnecessarily.",
        ));
        assert_eq!(stats.total_sentences, 2);
        assert_eq!(stats.total_words, 5 + 16);
        assert_eq!(stats.total_letters, 19 + 90);
        assert_eq!(stats.hard_sentences, 1);
        assert_eq!(stats.very_hard_sentences, 0);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = Statistics {
            total_paragraphs: 1,
            adverbs: 2,
            ..Statistics::default()
        };
        let b = Statistics {
            total_paragraphs: 3,
            passive_voice: 1,
            ..Statistics::default()
        };
        assert_eq!(a + b, b + a);

        a += b;
        assert_eq!(a.total_paragraphs, 4);
        assert_eq!(a.adverbs, 2);
        assert_eq!(a.passive_voice, 1);
    }

    #[test]
    fn sum_of_parts() {
        let parts = [
            Statistics {
                qualifiers: 1,
                ..Statistics::default()
            },
            Statistics {
                qualifiers: 2,
                ..Statistics::default()
            },
        ];
        let total: Statistics = parts.into_iter().sum();
        assert_eq!(total.qualifiers, 3);
    }

    #[test]
    fn serializes_counter_names() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        for (name, _) in Statistics::default().counters() {
            assert!(json.get(name).is_some(), "missing {name}");
        }
    }
}
