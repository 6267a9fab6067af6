//! Per-sentence readability scoring.
//!
//! Formula: `4.71 * (letters/words) + 0.5 * words - 21.43`, rounded half to
//! even. Sentences under 14 words are always [`ReadabilityTier::Normal`];
//! longer ones are `Hard` at levels 10–14 and `VeryHard` above 14.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markers::Marker;
use crate::text;

/// Sentences shorter than this are never flagged as hard to read.
pub const MIN_WORDS_FOR_TIER: usize = 14;

/// Lowest reading level that makes a long sentence hard to read.
const HARD_LEVEL: i32 = 10;

/// Highest reading level that is still only hard, not very hard.
const VERY_HARD_ABOVE: i32 = 14;

/// Coarse difficulty of a single sentence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityTier {
    /// Short or easy sentence.
    #[default]
    Normal,
    /// Reading level between 10 and 14.
    Hard,
    /// Reading level above 14.
    VeryHard,
}

impl ReadabilityTier {
    /// Marker that wraps a whole sentence of this tier, if any.
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Self::Normal => None,
            Self::Hard => Some(Marker::Yellow),
            Self::VeryHard => Some(Marker::Red),
        }
    }

    /// Returns the tier as a lowercase string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
        }
    }
}

impl std::fmt::Display for ReadabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements and tier for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceScore {
    /// Number of ASCII letters.
    pub letters: usize,
    /// Number of words.
    pub words: usize,
    /// Number of characters, punctuation and spaces included.
    pub characters: usize,
    /// Reading level, absent for sentences without words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_level: Option<i32>,
    /// Readability tier.
    pub tier: ReadabilityTier,
}

/// Compute the reading level from letter and word counts.
///
/// Returns `None` when `words` is zero.
#[allow(clippy::suboptimal_flops)]
pub fn reading_level(letters: usize, words: usize) -> Option<i32> {
    if words == 0 {
        return None;
    }
    // Must stay unfused: ties like 149.5 have to be exact before rounding.
    let level = 4.71 * (letters as f64 / words as f64) + 0.5 * words as f64 - 21.43;
    Some(level.round_ties_even() as i32)
}

/// Classify a sentence from its word count and reading level.
pub const fn classify(words: usize, reading_level: i32) -> ReadabilityTier {
    if words < MIN_WORDS_FOR_TIER {
        ReadabilityTier::Normal
    } else if reading_level >= HARD_LEVEL && reading_level <= VERY_HARD_ABOVE {
        ReadabilityTier::Hard
    } else if reading_level > VERY_HARD_ABOVE {
        ReadabilityTier::VeryHard
    } else {
        ReadabilityTier::Normal
    }
}

/// Score a sentence: count letters, words and characters, then classify.
pub fn score(sentence: &str) -> SentenceScore {
    let letters = text::letters(sentence).len();
    let words = text::words(sentence).len();
    let level = reading_level(letters, words);
    let tier = level.map_or(ReadabilityTier::Normal, |l| classify(words, l));

    SentenceScore {
        letters,
        words,
        characters: sentence.chars().count(),
        reading_level: level,
        tier,
    }
}
