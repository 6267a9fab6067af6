//! Sentence annotation.
//!
//! The annotator runs every detector over a sentence, resolves each finding
//! to a byte span of the *unmarked* sentence, and renders the sentence once
//! with markers around the claimed spans. Spans never overlap: a finding
//! whose text has no free occurrence left is a conflict. Conflicts are
//! counted like any other finding but are not rendered.
//!
//! A hard or very hard sentence is wrapped in its tier marker. Each span
//! inside it closes the tier, opens its own marker, and reopens the tier
//! afterwards, so terminals never have to nest colours:
//!
//! ```text
//! YELLOW ... END CYAN adverb END YELLOW ... END
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detectors::{self, Anchor, Finding, FindingKind};
use crate::lexicon::Lexicon;
use crate::markers::Marker;
use crate::readability::{self, ReadabilityTier, SentenceScore};
use crate::text;

/// Byte range of a sentence claimed by one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    const fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A finding together with the span it was rendered at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlacedFinding {
    /// The detector hit.
    #[serde(flatten)]
    pub finding: Finding,
    /// Where it sits in the sentence.
    pub span: Span,
}

/// Result of annotating one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnnotatedSentence {
    /// The sentence with markers inserted.
    pub rendered: String,
    /// Readability measurements.
    pub score: SentenceScore,
    /// Findings that were rendered, in detection order.
    pub findings: Vec<PlacedFinding>,
    /// Findings that overlapped an earlier span, in detection order.
    pub conflicts: Vec<Finding>,
}

impl AnnotatedSentence {
    /// Every finding, rendered or not.
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .map(|p| &p.finding)
            .chain(self.conflicts.iter())
    }

    /// Number of findings of one kind, conflicts included.
    pub fn count(&self, kind: FindingKind) -> usize {
        self.all_findings().filter(|f| f.kind == kind).count()
    }
}

/// Annotates sentences against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    lexicon: &'a Lexicon,
}

impl Default for Annotator<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> Annotator<'a> {
    /// Create an annotator that reads from `lexicon`.
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon in use.
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Score, detect and render one sentence.
    pub fn annotate(&self, sentence: &str) -> AnnotatedSentence {
        let score = readability::score(sentence);
        let words = text::words(sentence);

        let mut findings: Vec<PlacedFinding> = Vec::new();
        let mut conflicts = Vec::new();

        for finding in detectors::detect_all(sentence, &words, self.lexicon) {
            let claimed = findings.iter().map(|p| p.span);
            match locate(sentence, &finding, claimed) {
                Some(span) => findings.push(PlacedFinding { finding, span }),
                None => {
                    tracing::debug!(
                        kind = %finding.kind,
                        text = %finding.text,
                        "finding overlaps an earlier one, not rendered"
                    );
                    conflicts.push(finding);
                }
            }
        }

        let mut spans: Vec<(Span, Marker)> = findings
            .iter()
            .map(|p| (p.span, p.finding.kind.marker()))
            .collect();
        spans.sort_by_key(|(span, _)| span.start);

        AnnotatedSentence {
            rendered: render(sentence, &spans, score.tier),
            score,
            findings,
            conflicts,
        }
    }
}

/// First free occurrence of a finding's text.
///
/// Occurrences are plain substrings, so a word may be placed inside a longer
/// word that comes earlier in the sentence.
fn locate(
    sentence: &str,
    finding: &Finding,
    claimed: impl Iterator<Item = Span> + Clone,
) -> Option<Span> {
    let needle = finding.text.as_str();
    if needle.is_empty() {
        return None;
    }
    let is_free = |span: Span| claimed.clone().all(|c| !c.overlaps(span));

    match finding.anchor {
        Anchor::SentenceStart => {
            let span = Span {
                start: 0,
                end: needle.len(),
            };
            (sentence.starts_with(needle) && is_free(span)).then_some(span)
        }
        Anchor::Anywhere => {
            let mut from = 0;
            while let Some(offset) = sentence[from..].find(needle) {
                let start = from + offset;
                let span = Span {
                    start,
                    end: start + needle.len(),
                };
                if is_free(span) {
                    return Some(span);
                }
                // step one character so overlapping occurrences are tried too
                from = start + sentence[start..].chars().next().map_or(1, char::len_utf8);
            }
            None
        }
    }
}

/// Emit the sentence with markers around `spans`, which must be sorted and
/// disjoint.
fn render(sentence: &str, spans: &[(Span, Marker)], tier: ReadabilityTier) -> String {
    let outer = tier.marker();
    let end = Marker::End.code();
    let mut out = String::with_capacity(sentence.len() + 16 * (spans.len() + 1));

    if let Some(outer) = outer {
        out.push_str(outer.code());
    }

    let mut cursor = 0;
    for (span, inner) in spans {
        out.push_str(&sentence[cursor..span.start]);
        if outer.is_some() {
            out.push_str(end);
        }
        out.push_str(inner.code());
        out.push_str(&sentence[span.start..span.end]);
        out.push_str(end);
        if let Some(outer) = outer {
            out.push_str(outer.code());
        }
        cursor = span.end;
    }
    out.push_str(&sentence[cursor..]);

    if outer.is_some() {
        out.push_str(end);
    }
    out
}
