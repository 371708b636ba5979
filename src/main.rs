use std::io;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use linux2bsd::{Linux2BsdConfig, Query};
use linux2bsd::cli::Cli;
use linux2bsd::commands::{
    OutputMode, cmd_list_categories, cmd_save_config, cmd_show_categories, cmd_translate,
};

const LOG_ENV: &str = "LINUX2BSD_LOG";

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "linux2bsd", &mut io::stdout());
        return Ok(());
    }

    let mut config = Linux2BsdConfig::load()?;
    if cli.save_config {
        config = cli.merged_config(&config);
        cmd_save_config(&config)?;
    }

    let source = cli.data_source(&config);
    let direction = cli.direction(&config);

    if cli.list_categories {
        cmd_list_categories(&source)?;
    }

    if cli.show_category {
        return cmd_show_categories(&source, &cli.command, direction);
    }

    if cli.command.is_empty() {
        if cli.list_categories || cli.save_config {
            return Ok(());
        }
        bail!("Nothing to translate. Try `linux2bsd apt` or `linux2bsd --help`.");
    }

    let query = Query::from_words(&cli.command, cli.syntax(&config))?;
    let mode = if cli.json {
        OutputMode::Json
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Quiet
    };

    cmd_translate(
        &source,
        &query,
        direction,
        cli.limit(&config),
        mode,
        cli.interactive(&config),
    )
}

/// Diagnostics go to stderr, filtered by `LINUX2BSD_LOG` (default: warnings)
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
