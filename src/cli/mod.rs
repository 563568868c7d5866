//! CLI module for swimshop-api
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution

pub mod config_merger;
pub mod executor;
pub mod parser;
pub mod serve;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::error::ConfigError;
use crate::config::Settings;
use crate::logger::init_logger;

/// Load configuration files and apply CLI overrides.
///
/// Returns the validated settings and the environment they were loaded for.
pub fn load_and_merge_config(
    cli: &Cli,
) -> Result<(Settings, crate::config::Environment), ConfigError> {
    let (merger, environment) = ConfigurationMerger::load(cli)?;
    let settings = merger.merge_cli_args(cli)?;
    Ok((settings, environment))
}

/// Install the global logger described by `settings.logger`.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)?;
    Ok(())
}
