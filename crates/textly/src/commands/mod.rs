//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod case;
pub mod clean;
pub mod file;
pub mod info;
pub mod stats;

/// Resolve a command's input to a string: inline `--text` wins, otherwise
/// the file argument is read (with a size preflight against `max_bytes`).
///
/// Every text-taking command accepts the same pair, so the validation
/// lives here once.
pub fn resolve_input(
    text: Option<String>,
    path: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let Some(path) = path else {
        anyhow::bail!("provide a FILE argument or --text");
    };
    read_input_file(path, max_bytes)
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
