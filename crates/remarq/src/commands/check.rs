//! Check command: annotated text followed by the statistics summary.

use camino::Utf8PathBuf;
use clap::Args;
use remarq_core::{Config, Document, Lexicon, Processor, SourceFormat};
use tracing::{debug, instrument};

use super::load_document;
use crate::render;

/// Sample text shown by `check --example`.
pub const EXAMPLE_TEXT: &str = include_str!("../../assets/example.txt");

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to analyze (`.md` files are read as Markdown).
    #[arg(required_unless_present = "example", conflicts_with = "example")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze the bundled example text instead of a file.
    #[arg(long)]
    pub example: bool,

    /// Wrap output at this many columns (default: terminal width).
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Print only the annotated text.
    #[arg(long)]
    pub no_stats: bool,

    /// Read the file in this format instead of guessing from its extension.
    #[arg(long, value_enum)]
    pub format: Option<SourceFormat>,
}

/// Annotate a file and print it with its statistics.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.file, example = args.example))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    color: bool,
    config: &Config,
    lexicon: &Lexicon,
) -> anyhow::Result<()> {
    debug!(width = ?args.width, no_stats = args.no_stats, "executing check command");

    let document = match args.file {
        Some(ref file) => load_document(file, args.format, config.input_limit())?,
        None => Document::from_plain_text(EXAMPLE_TEXT),
    };
    let processed = Processor::new(lexicon).process(document.paragraphs());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&processed.into_plain())?);
        return Ok(());
    }

    let width = render::resolve_width(args.width, config.wrap_width);
    for paragraph in &processed.paragraphs {
        println!("{}", render::wrap_paragraph(paragraph, width, color));
    }

    if !args.no_stats {
        println!("\n\n{}\n", "=".repeat(36));
        print!("{}", render::summary(&processed.statistics));
    }

    Ok(())
}
