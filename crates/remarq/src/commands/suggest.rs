//! Suggest command: simpler alternatives for complex phrases.

use std::io::{BufRead, Write};

use clap::Args;
use remarq_core::Lexicon;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug, Default)]
pub struct SuggestArgs {
    /// Phrases to look up. Reads one phrase per line from stdin when omitted.
    pub phrases: Vec<String>,
}

/// Lookup result for one phrase.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    /// The phrase as given.
    pub phrase: String,
    /// Alternatives, empty when the phrase is unknown.
    pub alternatives: Vec<String>,
}

impl Suggestion {
    /// Look up a phrase, ignoring case and surrounding whitespace.
    pub fn lookup(lexicon: &Lexicon, phrase: &str) -> Self {
        Self {
            phrase: phrase.trim().to_string(),
            alternatives: lexicon
                .suggestions(phrase)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// `# a, b`, or `# no results`.
    pub fn to_line(&self) -> String {
        if self.alternatives.is_empty() {
            "# no results".to_string()
        } else {
            format!("# {}", self.alternatives.join(", "))
        }
    }
}

/// Print alternatives for each phrase.
#[instrument(name = "cmd_suggest", skip_all, fields(phrases = args.phrases.len()))]
pub fn cmd_suggest(args: SuggestArgs, global_json: bool, lexicon: &Lexicon) -> anyhow::Result<()> {
    debug!("executing suggest command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.phrases.is_empty() {
        return answer_lines(lexicon, std::io::stdin().lock(), &mut out, global_json);
    }

    let suggestions: Vec<Suggestion> = args
        .phrases
        .iter()
        .map(|p| Suggestion::lookup(lexicon, p))
        .collect();
    if global_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&suggestions)?)?;
    } else {
        for suggestion in &suggestions {
            writeln!(out, "{}", suggestion.to_line())?;
        }
    }
    Ok(())
}

/// Answer one phrase per input line until EOF, skipping blank lines.
///
/// In JSON mode each answer is one compact JSON object per line.
pub fn answer_lines<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    input: R,
    out: &mut W,
    json: bool,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let suggestion = Suggestion::lookup(lexicon, &line);
        if json {
            writeln!(out, "{}", serde_json::to_string(&suggestion)?)?;
        } else {
            writeln!(out, "{}", suggestion.to_line())?;
        }
        out.flush()?;
    }
    Ok(())
}
