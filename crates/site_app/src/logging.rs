//! Logger setup for the `site` binary.
//!
//! Terminal output goes to stderr so printed pages stay clean on stdout.
//! File output goes to `./site.log` in the current directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::cli::LogTarget;

const LOG_FILE: &str = "./site.log";

pub fn initialize(target: LogTarget, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match target {
        LogTarget::Terminal => vec![term_logger(level, config)],
        LogTarget::File => match create_file_logger(level, config.clone()) {
            Some(file_logger) => vec![file_logger],
            None => vec![term_logger(level, config)],
        },
        LogTarget::Both => {
            let mut loggers = vec![term_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

/// `-v` wins over the config file; an unknown config level means info.
pub fn resolve_level(verbose: u8, configured: &str) -> LevelFilter {
    if verbose > 0 {
        return site_logging::level_for_verbosity(verbose);
    }
    configured.parse().unwrap_or(LevelFilter::Info)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => {
            let logger: Box<dyn SharedLogger> = WriteLogger::new(level, config, file);
            Some(logger)
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_config_level() {
        assert_eq!(resolve_level(0, "warn"), LevelFilter::Warn);
        assert_eq!(resolve_level(1, "warn"), LevelFilter::Debug);
        assert_eq!(resolve_level(0, "loud"), LevelFilter::Info);
    }
}
