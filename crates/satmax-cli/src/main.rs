//! `satmax` command-line entry point.

mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use satmax::{SatMaxConfig, SatMaxError, DEFAULT_CONFIG_FILE};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Maximize(args) => commands::maximize::run(args, config),
        Commands::Bench(args) => commands::bench::run(args, config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    if cli.plain {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level.into())
                    .from_env_lossy(),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        satmax::console::init_with_level(level);
    }
}

// An explicit --config must load; the implicit ./satmax.toml is optional.
fn load_config(path: Option<&Path>) -> Result<SatMaxConfig, SatMaxError> {
    match path {
        Some(path) => Ok(SatMaxConfig::load(path)?),
        None => Ok(SatMaxConfig::load_or_default(DEFAULT_CONFIG_FILE)?),
    }
}
