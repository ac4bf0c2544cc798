//! textly CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use textly::{Cli, Commands, commands};
use textly_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, _sources) = loader.load().context("failed to load configuration")?;

    let env_filter =
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init(config.log_dir.as_deref(), env_filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let limits = config.limits();

    // Execute command
    let result = match command {
        Commands::Stats(args) => commands::stats::cmd_stats(args, cli.json, &limits),
        Commands::File(args) => commands::file::cmd_file(args, cli.json, &limits),
        Commands::Clean(args) => commands::clean::cmd_clean(args, Some(limits.max_file_bytes)),
        Commands::Case(args) => commands::case::cmd_case(args, Some(limits.max_file_bytes)),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &limits),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
