//! Lexicon shared by all detectors.
//!
//! A [`Lexicon`] is built once from the tables in [`crate::word_lists`],
//! optionally extended with entries from configuration, and never mutated
//! afterwards. Lookups take lowercase words; a word that is missing from a
//! table is simply not a match.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LexiconResult;
use crate::word_lists;

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    LexiconBuilder::default()
        .build()
        .expect("built-in lexicon is valid")
});

/// A wordy phrase and its plainer alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexPhrase {
    /// The phrase as matched in text.
    pub phrase: String,
    /// Suggested replacements.
    pub suggestions: Vec<String>,
}

/// Read-only word and phrase tables used by the detectors.
#[derive(Debug, Clone)]
pub struct Lexicon {
    non_adverbs: HashSet<String>,
    qualifiers: HashMap<String, Vec<String>>,
    qualifier_linkers: HashSet<String>,
    passive_triggers: HashSet<String>,
    complex_phrases: Vec<ComplexPhrase>,
    phrase_index: HashMap<String, usize>,
    phrase_matcher: AhoCorasick,
    openers: Vec<String>,
}

impl Lexicon {
    /// The built-in lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Start from the built-in tables and add entries to them.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Whether a lowercase `-ly` word is known not to be an adverb.
    pub fn is_non_adverb(&self, lower: &str) -> bool {
        self.non_adverbs.contains(lower)
    }

    /// Pronouns allowed before a qualifier word, or `None` if it is not one.
    ///
    /// An empty slice means the word is a qualifier on its own.
    pub fn qualifier_pronouns(&self, lower: &str) -> Option<&[String]> {
        self.qualifiers.get(lower).map(Vec::as_slice)
    }

    /// Whether a lowercase word may link a pronoun to a qualifier.
    pub fn is_qualifier_linker(&self, lower: &str) -> bool {
        self.qualifier_linkers.contains(lower)
    }

    /// Whether a lowercase word introduces a passive construction.
    pub fn is_passive_trigger(&self, lower: &str) -> bool {
        self.passive_triggers.contains(lower)
    }

    /// All complex phrases, in reporting order.
    pub fn complex_phrases(&self) -> &[ComplexPhrase] {
        &self.complex_phrases
    }

    /// Simpler alternatives for a complex phrase, looked up case-insensitively.
    pub fn suggestions(&self, phrase: &str) -> Option<&[String]> {
        self.phrase_index
            .get(&index_key(phrase))
            .map(|&idx| self.complex_phrases[idx].suggestions.as_slice())
    }

    /// Cliché sentence openers, in matching order.
    pub fn openers(&self) -> &[String] {
        &self.openers
    }

    /// Automaton over every complex phrase; pattern IDs index
    /// [`Lexicon::complex_phrases`].
    pub(crate) const fn phrase_matcher(&self) -> &AhoCorasick {
        &self.phrase_matcher
    }
}

/// Builder that extends the built-in tables.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    extra_non_adverbs: Vec<String>,
    extra_complex_phrases: Vec<(String, Vec<String>)>,
}

impl LexiconBuilder {
    /// Add words ending in `-ly` that are not adverbs.
    pub fn non_adverbs<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_non_adverbs.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add complex phrases, or replace the suggestions of existing ones.
    ///
    /// New phrases are matched after the built-in ones, in the order given.
    pub fn complex_phrases<I, K, V>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        self.extra_complex_phrases.extend(
            phrases
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect())),
        );
        self
    }

    /// Build the lexicon.
    #[tracing::instrument(skip_all, fields(
        extra_non_adverbs = self.extra_non_adverbs.len(),
        extra_complex_phrases = self.extra_complex_phrases.len(),
    ))]
    pub fn build(self) -> LexiconResult<Lexicon> {
        let mut non_adverbs: HashSet<String> = word_lists::NON_ADVERB_LY_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        non_adverbs.extend(
            self.extra_non_adverbs
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );

        let mut complex_phrases: Vec<ComplexPhrase> = word_lists::COMPLEX_PHRASES
            .iter()
            .map(|(phrase, suggestions)| ComplexPhrase {
                phrase: (*phrase).to_string(),
                suggestions: suggestions.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();
        let mut phrase_index: HashMap<String, usize> = complex_phrases
            .iter()
            .enumerate()
            .map(|(idx, c)| (index_key(&c.phrase), idx))
            .collect();

        for (phrase, suggestions) in self.extra_complex_phrases {
            if phrase.trim().is_empty() {
                tracing::warn!("skipping empty complex phrase from configuration");
                continue;
            }
            let key = index_key(&phrase);
            if let Some(&idx) = phrase_index.get(&key) {
                complex_phrases[idx].suggestions = suggestions;
            } else {
                phrase_index.insert(key, complex_phrases.len());
                complex_phrases.push(ComplexPhrase {
                    phrase,
                    suggestions,
                });
            }
        }

        let phrase_matcher = AhoCorasick::new(complex_phrases.iter().map(|c| c.phrase.as_str()))?;

        let qualifiers = word_lists::QUALIFYING_WORDS
            .iter()
            .map(|(word, pronouns)| {
                (
                    (*word).to_string(),
                    pronouns.iter().map(|p| (*p).to_string()).collect(),
                )
            })
            .collect();

        tracing::debug!(
            non_adverbs = non_adverbs.len(),
            complex_phrases = complex_phrases.len(),
            "lexicon built"
        );

        Ok(Lexicon {
            non_adverbs,
            qualifiers,
            qualifier_linkers: to_owned_set(word_lists::QUALIFIER_LINKERS),
            passive_triggers: to_owned_set(word_lists::PASSIVE_VOICE_TRIGGERS),
            complex_phrases,
            phrase_index,
            phrase_matcher,
            openers: word_lists::SENTENCE_OPENERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        })
    }
}

/// Lookup key for a phrase: trimmed and lowercased.
fn index_key(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

fn to_owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
