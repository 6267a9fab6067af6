//! Stats command: statistics only.

use camino::Utf8PathBuf;
use clap::Args;
use remarq_core::{Lexicon, Processor, SourceFormat};
use tracing::{debug, instrument};

use super::load_document;
use crate::render;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Read the file in this format instead of guessing from its extension.
    #[arg(long, value_enum)]
    pub format: Option<SourceFormat>,
}

/// Print the statistics of a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing stats command");

    let document = load_document(&args.file, args.format, max_input_bytes)?;
    let stats = Processor::new(lexicon)
        .process(document.paragraphs())
        .statistics;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render::summary(&stats));
    }

    Ok(())
}
