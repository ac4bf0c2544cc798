//! Case command — case conversion.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textly_core::CaseStyle;

use super::resolve_input;

/// Arguments for the `case` subcommand.
#[derive(Args, Debug)]
pub struct CaseArgs {
    /// Target case style.
    #[arg(value_enum)]
    pub style: CaseStyle,

    /// File to convert.
    pub file: Option<Utf8PathBuf>,

    /// Convert this string instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

/// Convert text to the requested case, printing the result to stdout.
#[instrument(name = "cmd_case", skip_all, fields(style = %args.style))]
pub fn cmd_case(args: CaseArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(style = %args.style, file = ?args.file, "executing case command");

    let content = resolve_input(args.text, args.file.as_deref(), max_input_bytes)?;
    println!("{}", args.style.apply(&content));
    Ok(())
}
