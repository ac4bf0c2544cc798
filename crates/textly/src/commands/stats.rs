//! Stats command — full text statistics.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textly_core::{Limits, TextStats, analyze_text};

use super::resolve_input;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze (plain text).
    pub file: Option<Utf8PathBuf>,

    /// Analyze this string instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Hide the keyword density table in text output.
    #[arg(long)]
    pub no_keywords: bool,
}

/// Analyze text and print its statistics.
#[instrument(name = "cmd_stats", skip_all)]
pub fn cmd_stats(args: StatsArgs, global_json: bool, limits: &Limits) -> anyhow::Result<()> {
    debug!(file = ?args.file, inline = args.text.is_some(), "executing stats command");

    let content = resolve_input(args.text, args.file.as_deref(), Some(limits.max_file_bytes))?;
    let stats = analyze_text(&content, limits).context("failed to analyze text")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_stats(&stats, args.no_keywords);
    Ok(())
}

/// Render a stats report as colored text.
pub fn print_stats(stats: &TextStats, no_keywords: bool) {
    println!("{} {}", "Words:".cyan(), stats.word_count);
    println!("{} {}", "Characters:".cyan(), stats.character_count);
    println!(
        "{} {}",
        "Characters (no spaces):".cyan(),
        stats.character_count_no_spaces,
    );
    println!("{} {}", "Sentences:".cyan(), stats.sentence_count);
    println!("{} {}", "Paragraphs:".cyan(), stats.paragraph_count);
    println!(
        "{} {}m {}s",
        "Reading time:".cyan(),
        stats.reading_time.minutes,
        stats.reading_time.seconds,
    );
    println!(
        "{} {}m {}s",
        "Speaking time:".cyan(),
        stats.speaking_time.minutes,
        stats.speaking_time.seconds,
    );

    if !no_keywords && !stats.keyword_density.is_empty() {
        println!("\n{}", "Top keywords:".cyan());
        for entry in &stats.keyword_density {
            println!("  {:<20} {:>4}  {:>6.2}%", entry.word, entry.count, entry.density);
        }
    }
}
