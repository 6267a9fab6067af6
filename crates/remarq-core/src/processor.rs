//! Document processing.
//!
//! Turns a list of paragraphs into annotated paragraphs and statistics.
//! Blank paragraphs pass through unchanged and are not counted; every other
//! paragraph is split into sentences, each sentence is annotated, and the
//! results are joined as `" " + sentence`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::annotate::{AnnotatedSentence, Annotator};
use crate::detectors::FindingKind;
use crate::lexicon::Lexicon;
use crate::markers;
use crate::statistics::Statistics;
use crate::text;

/// One finding with its location in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FindingRecord {
    /// 1-based paragraph number.
    pub paragraph: usize,
    /// 1-based sentence number within the paragraph.
    pub sentence: usize,
    /// Kind of issue.
    pub kind: FindingKind,
    /// Text as it appears in the sentence.
    pub text: String,
    /// Whether the finding is highlighted in the output.
    pub rendered: bool,
}

/// Output of a processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProcessedDocument {
    /// Annotated paragraphs, one per input paragraph.
    pub paragraphs: Vec<String>,
    /// Counters for the whole document.
    pub statistics: Statistics,
    /// Every finding, in document order.
    pub findings: Vec<FindingRecord>,
}

impl ProcessedDocument {
    /// Strip every marker from the annotated paragraphs.
    #[must_use]
    pub fn into_plain(mut self) -> Self {
        for paragraph in &mut self.paragraphs {
            *paragraph = markers::strip_markers(paragraph);
        }
        self
    }
}

/// Processes documents against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Processor<'a> {
    annotator: Annotator<'a>,
}

impl Default for Processor<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> Processor<'a> {
    /// Create a processor that reads from `lexicon`.
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            annotator: Annotator::new(lexicon),
        }
    }

    /// Process a whole document.
    #[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len()))]
    pub fn process<S: AsRef<str>>(&self, paragraphs: &[S]) -> ProcessedDocument {
        let mut doc = ProcessedDocument::default();

        for (idx, paragraph) in paragraphs.iter().enumerate() {
            let paragraph = paragraph.as_ref();
            if text::is_blank(paragraph) {
                doc.paragraphs.push(paragraph.to_string());
                continue;
            }

            doc.statistics.total_paragraphs += 1;
            let sentences = self.process_paragraph(paragraph);
            let mut rendered = String::with_capacity(paragraph.len() * 2);

            for (sentence_idx, annotated) in sentences.iter().enumerate() {
                rendered.push(' ');
                rendered.push_str(&annotated.rendered);
                record(&mut doc.statistics, annotated);
                doc.findings.extend(records(idx + 1, sentence_idx + 1, annotated));
            }
            doc.paragraphs.push(rendered);
        }

        tracing::debug!(
            paragraphs = doc.statistics.total_paragraphs,
            sentences = doc.statistics.total_sentences,
            findings = doc.findings.len(),
            "document processed"
        );
        doc
    }

    /// Annotate every sentence of one paragraph.
    pub fn process_paragraph(&self, paragraph: &str) -> Vec<AnnotatedSentence> {
        text::split_sentences(paragraph)
            .into_iter()
            .map(|sentence| self.annotator.annotate(sentence))
            .collect()
    }
}

/// Process a document with the built-in lexicon.
pub fn process<S: AsRef<str>>(paragraphs: &[S]) -> ProcessedDocument {
    Processor::default().process(paragraphs)
}

fn record(stats: &mut Statistics, annotated: &AnnotatedSentence) {
    stats.record_sentence(&annotated.score);
    for finding in annotated.all_findings() {
        stats.record(finding.kind);
    }
}

fn records(
    paragraph: usize,
    sentence: usize,
    annotated: &AnnotatedSentence,
) -> impl Iterator<Item = FindingRecord> + '_ {
    let rendered = annotated.findings.iter().map(|p| (&p.finding, true));
    let conflicts = annotated.conflicts.iter().map(|f| (f, false));
    rendered
        .chain(conflicts)
        .map(move |(finding, rendered)| FindingRecord {
            paragraph,
            sentence,
            kind: finding.kind,
            text: finding.text.clone(),
            rendered,
        })
}
