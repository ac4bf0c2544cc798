//! File command — document extraction plus statistics.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textly_core::{Limits, process_file};

use super::stats::print_stats;

/// Arguments for the `file` subcommand.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Document to process (.txt, .docx, or .pdf).
    pub file: Utf8PathBuf,

    /// Print the extracted-text preview after the statistics.
    #[arg(long)]
    pub show_text: bool,
}

/// Extract text from a document and print its statistics.
#[instrument(name = "cmd_file", skip_all, fields(file = %args.file))]
pub fn cmd_file(args: FileArgs, global_json: bool, limits: &Limits) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing file command");

    let filename = args
        .file
        .file_name()
        .with_context(|| format!("{} has no filename", args.file))?;

    let bytes = std::fs::read(args.file.as_std_path())
        .with_context(|| format!("failed to read {}", args.file))?;

    let report = process_file(filename, &bytes, limits)
        .with_context(|| format!("failed to process {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.filename.bold());
    print_stats(&report.stats, false);

    if args.show_text {
        println!("\n{}", "Extracted text (preview):".cyan());
        println!("{}", report.text);
    }

    Ok(())
}
