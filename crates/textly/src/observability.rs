//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr so stdout stays clean for command output
//! (including `--json`). When a log directory is configured, a second
//! non-blocking layer writes to `textly.log` inside it.

use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each
/// `--verbose` raises the level, and the config value is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global subscriber.
///
/// Returns the file appender's worker guard when file logging is active;
/// hold it for the life of the process so buffered lines are flushed.
pub fn init(log_dir: Option<&Utf8Path>, filter: EnvFilter) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir.as_std_path())?;
        let appender = tracing_appender::rolling::never(dir.as_std_path(), "textly.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        Ok(None)
    }
}
