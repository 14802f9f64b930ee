mod cli;
mod commands;
mod config;
mod logging;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use site_logging::{site_error, site_info};

use crate::cli::{Cli, Command};
use crate::config::{apply_build_overrides, load_config, ConfigSource};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            site_error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = load_config(&cli.config);
    let level = match &loaded {
        Ok((config, _)) => logging::resolve_level(cli.verbose, &config.log_level),
        Err(_) => logging::resolve_level(cli.verbose, "info"),
    };
    logging::initialize(cli.log_to, level);

    let (config, source) = loaded?;
    match source {
        ConfigSource::File => site_info!("loaded config from {}", cli.config.display()),
        ConfigSource::Defaults => {
            site_info!("no config at {}, using defaults", cli.config.display())
        }
    }
    let mut settings = config.into_settings();

    match cli.command {
        Command::Build { out, offline } => {
            apply_build_overrides(&mut settings, out, offline);
            let summary = commands::run_build(settings)?;
            print!("{}", terminal::format_summary(&summary));
        }
        Command::List {
            section,
            search,
            category,
            page,
        } => {
            let text = commands::run_list(&settings, section, &search, &category, page)?;
            print!("{text}");
        }
        Command::Show { id } => {
            print!("{}", commands::run_show(&id)?);
        }
    }
    Ok(())
}
