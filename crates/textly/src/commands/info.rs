//! Info command — package and build information.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use textly_core::Limits;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Info<'a> {
    name: &'a str,
    version: &'a str,
    pdf_support: bool,
    max_text_chars: usize,
    max_file_bytes: usize,
}

/// Show package name, version, and effective limits.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(_args: InfoArgs, global_json: bool, limits: &Limits) -> anyhow::Result<()> {
    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        pdf_support: limits.pdf_enabled,
        max_text_chars: limits.max_text_chars,
        max_file_bytes: limits.max_file_bytes,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.name.bold(), info.version);
    println!(
        "{} {}",
        "PDF support:".cyan(),
        if info.pdf_support { "enabled" } else { "disabled" },
    );
    println!("{} {}", "Max text chars:".cyan(), info.max_text_chars);
    println!("{} {}", "Max file bytes:".cyan(), info.max_file_bytes);
    Ok(())
}
