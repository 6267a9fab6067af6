//! Terminal rendering.
//!
//! Annotated paragraphs carry multi-byte colour sequences. To wrap them by
//! visible width, each sequence is first shrunk to its one-column sentinel
//! symbol, the paragraph is filled, and the symbols are expanded back (or
//! dropped when colour is off).

use owo_colors::{OwoColorize, Stream};
use remarq_core::{Statistics, markers};

/// Wrap one annotated paragraph to `width` columns.
pub fn wrap_paragraph(paragraph: &str, width: usize, color: bool) -> String {
    let symbols = markers::to_symbols(paragraph);
    let options = textwrap::Options::new(width.max(1)).break_words(false);
    let filled = textwrap::fill(&symbols, options);
    if color {
        markers::to_markers(&filled)
    } else {
        markers::strip_markers(&filled)
    }
}

/// Output width: the flag, else the configured width, else the terminal.
pub fn resolve_width(flag: Option<usize>, configured: Option<usize>) -> usize {
    flag.or(configured).unwrap_or_else(textwrap::termwidth)
}

/// Readable statistics report with advice for each kind of finding.
pub fn summary(stats: &Statistics) -> String {
    let sentences = stats.total_sentences;
    let mut out = format!(
        "Paragraphs: {}\nSentences: {sentences}\nWords: {}\nCharacters: {} ({} letters)\n\n",
        stats.total_paragraphs, stats.total_words, stats.total_characters, stats.total_letters
    );

    out.push_str(&format!(
        "{} out of {sentences} sentences are {}.\n",
        stats.hard_sentences,
        "hard to read".if_supports_color(Stream::Stdout, |t| t.bright_yellow())
    ));
    out.push_str(&format!(
        "{} out of {sentences} sentences are {}.\n",
        stats.very_hard_sentences,
        "very hard to read".if_supports_color(Stream::Stdout, |t| t.bright_red())
    ));

    out.push_str("Found:\n");
    let openers = format!("- {} cliché sentence openers", stats.bad_openers);
    out.push_str(&format!(
        "{}.{}\n",
        openers.if_supports_color(Stream::Stdout, |t| t.green()),
        advice(stats.bad_openers, "Rebuild the sentence to avoid them.")
    ));
    let passive = format!("- {} uses of passive voice", stats.passive_voice);
    out.push_str(&format!(
        "{}.{}\n",
        passive.if_supports_color(Stream::Stdout, |t| t.green()),
        advice(stats.passive_voice, "Use active voice instead.")
    ));
    let hedges = format!("- {} adverbs & {} qualifiers", stats.adverbs, stats.qualifiers);
    out.push_str(&format!(
        "{}.{}\n",
        hedges.if_supports_color(Stream::Stdout, |t| t.cyan()),
        advice(
            stats.qualifiers,
            &format!("Try to use {} or less.", qualifier_budget(stats))
        )
    ));
    let complex = format!("- {} phrases have simpler alternatives", stats.complex_phrases);
    out.push_str(&format!(
        "{}.{}\n",
        complex.if_supports_color(Stream::Stdout, |t| t.magenta()),
        advice(
            stats.complex_phrases,
            "Run `remarq suggest <PHRASE>` for replacement recommendations."
        )
    ));

    out
}

/// Suggested maximum number of qualifiers: one per three paragraphs.
pub const fn qualifier_budget(stats: &Statistics) -> usize {
    stats.total_paragraphs / 3
}

fn advice(count: usize, text: &str) -> String {
    if count > 0 {
        format!(" {text}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_by_visible_width() {
        let paragraph = " \x1b[36mI think\x1b[0m we should leave now.";
        let wrapped = wrap_paragraph(paragraph, 20, true);
        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(markers::strip_markers(line).chars().count() <= 20, "{line:?}");
        }
        assert!(wrapped.contains("\x1b[36mI think\x1b[0m"));
    }

    #[test]
    fn strips_markers_without_color() {
        let wrapped = wrap_paragraph("\x1b[35min order to\x1b[0m win.", 80, false);
        assert_eq!(wrapped, "in order to win.");
    }

    #[test]
    fn long_words_are_not_broken() {
        let wrapped = wrap_paragraph("Supercalifragilistic words.", 5, false);
        assert!(wrapped.lines().any(|l| l == "Supercalifragilistic"));
    }

    #[test]
    fn empty_paragraph_stays_empty() {
        assert_eq!(wrap_paragraph("", 40, true), "");
    }

    #[test]
    fn width_precedence() {
        assert_eq!(resolve_width(Some(50), Some(70)), 50);
        assert_eq!(resolve_width(None, Some(70)), 70);
        assert!(resolve_width(None, None) > 0);
    }

    #[test]
    fn summary_gives_advice_only_for_findings() {
        let stats = Statistics {
            total_paragraphs: 7,
            total_sentences: 4,
            qualifiers: 3,
            passive_voice: 0,
            bad_openers: 1,
            ..Statistics::default()
        };
        let text = summary(&stats);
        assert!(text.contains("Paragraphs: 7"));
        assert!(text.contains("Rebuild the sentence to avoid them."));
        assert!(!text.contains("Use active voice instead."));
        assert!(text.contains("Try to use 2 or less."));
        assert!(!text.contains("remarq suggest"));
    }

    #[test]
    fn summary_layout_without_color() {
        owo_colors::set_override(false);
        let stats = Statistics {
            total_paragraphs: 3,
            total_sentences: 5,
            total_words: 40,
            total_characters: 210,
            total_letters: 170,
            hard_sentences: 1,
            very_hard_sentences: 2,
            adverbs: 4,
            qualifiers: 1,
            complex_phrases: 2,
            ..Statistics::default()
        };
        let expected = "\
Paragraphs: 3
Sentences: 5
Words: 40
Characters: 210 (170 letters)

1 out of 5 sentences are hard to read.
2 out of 5 sentences are very hard to read.
Found:
- 0 cliché sentence openers.
- 0 uses of passive voice.
- 4 adverbs & 1 qualifiers. Try to use 1 or less.
- 2 phrases have simpler alternatives. Run `remarq suggest <PHRASE>` for replacement recommendations.
";
        assert_eq!(summary(&stats), expected);
    }

    #[test]
    fn qualifier_budget_rounds_down() {
        let stats = Statistics {
            total_paragraphs: 2,
            ..Statistics::default()
        };
        assert_eq!(qualifier_budget(&stats), 0);
    }
}
