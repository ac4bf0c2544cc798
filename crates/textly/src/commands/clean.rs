//! Clean command — whitespace normalization.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textly_core::transform::remove_extra_spaces;

use super::resolve_input;

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// File to clean.
    pub file: Option<Utf8PathBuf>,

    /// Clean this string instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

/// Collapse extra spaces and blank lines, printing the result to stdout.
#[instrument(name = "cmd_clean", skip_all)]
pub fn cmd_clean(args: CleanArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing clean command");

    let content = resolve_input(args.text, args.file.as_deref(), max_input_bytes)?;
    println!("{}", remove_extra_spaces(&content));
    Ok(())
}
