//! Style pattern detectors.
//!
//! Five independent detectors, each in its own module:
//!
//! - [`adverbs`]: `-ly` words that are not on the exception list
//! - [`qualifiers`]: hedging words, optionally with a leading pronoun
//! - [`passive_voice`]: a form of "to be" followed by an `-ed` word
//! - [`complex_phrases`]: wordy phrases with plainer alternatives
//! - [`openers`]: cliché sentence openers
//!
//! Token detectors work on the word list of a sentence and expose a per-word
//! check so the annotator can interleave them word by word. All detectors
//! read the unmarked sentence.

pub mod adverbs;
pub mod complex_phrases;
pub mod openers;
pub mod passive_voice;
pub mod qualifiers;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::markers::Marker;

/// What a detector found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// An adverb.
    Adverb,
    /// A qualifier word or phrase.
    Qualifier,
    /// A passive-voice construction.
    PassiveVoice,
    /// A phrase with a simpler alternative.
    ComplexPhrase,
    /// A cliché sentence opener.
    BadOpener,
}

impl FindingKind {
    /// Marker placed around findings of this kind.
    pub const fn marker(self) -> Marker {
        match self {
            Self::Adverb | Self::Qualifier => Marker::Cyan,
            Self::PassiveVoice | Self::BadOpener => Marker::Green,
            Self::ComplexPhrase => Marker::Purple,
        }
    }

    /// Returns the kind as a snake_case string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adverb => "adverb",
            Self::Qualifier => "qualifier",
            Self::PassiveVoice => "passive_voice",
            Self::ComplexPhrase => "complex_phrase",
            Self::BadOpener => "bad_opener",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the sentence a finding's text may be placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// First free occurrence anywhere in the sentence.
    #[default]
    Anywhere,
    /// Only at the very start of the sentence.
    SentenceStart,
}

/// One detector hit: the literal text to highlight and its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Kind of issue.
    pub kind: FindingKind,
    /// Text as it appears in the sentence.
    pub text: String,
    /// Placement constraint.
    #[serde(skip)]
    pub anchor: Anchor,
}

impl Finding {
    /// A finding that may be placed anywhere in the sentence.
    pub fn new(kind: FindingKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            anchor: Anchor::Anywhere,
        }
    }

    /// A finding that must sit at the start of the sentence.
    pub fn at_start(kind: FindingKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            anchor: Anchor::SentenceStart,
        }
    }
}

/// Run the token detectors word by word.
///
/// For each word: adverb, or failing that qualifier; then passive voice.
pub fn token_findings(words: &[&str], lexicon: &Lexicon) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (i, &word) in words.iter().enumerate() {
        if adverbs::is_adverb(word, lexicon) {
            findings.push(Finding::new(FindingKind::Adverb, word));
        } else if let Some(phrase) = qualifiers::phrase_at(words, i, lexicon) {
            findings.push(Finding::new(FindingKind::Qualifier, phrase));
        }

        if let Some(phrase) = passive_voice::phrase_at(words, i, lexicon) {
            findings.push(Finding::new(FindingKind::PassiveVoice, phrase));
        }
    }
    findings
}

/// Run every detector over a sentence, in annotation order.
pub fn detect_all(sentence: &str, words: &[&str], lexicon: &Lexicon) -> Vec<Finding> {
    let mut findings = token_findings(words, lexicon);
    findings.extend(complex_phrases::detect(sentence, lexicon));
    findings.extend(openers::detect(sentence, lexicon));
    findings
}
