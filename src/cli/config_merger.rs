//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override every configuration layer, including
//! `SWIMSHOP_*` environment variables.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, Settings};

/// Applies CLI overrides on top of file-based settings.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load settings with the loader `cli` selects.
    ///
    /// `--config` switches to single-file mode and `--env` overrides
    /// `SWIMSHOP_APP_ENV`. Returns the environment that was used.
    pub fn load(cli: &Cli) -> Result<(Self, Environment), ConfigError> {
        let mut loader = ConfigLoader::new()?;
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }
        if let Some(path) = cli.config.as_deref() {
            Self::check_readable(path)?;
            loader = loader.with_file(path);
        }

        let settings = loader.load()?;
        Ok((Self::new(settings), loader.environment()))
    }

    fn check_readable(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        std::fs::File::open(path)
            .map(|_| ())
            .map_err(|e| {
                ConfigError::validation(
                    "config_file",
                    format!("Cannot read configuration file '{}': {}", path.display(), e),
                )
            })
    }

    /// Apply CLI overrides and validate the result.
    ///
    /// Precedence for the log level: `--log-level`, then `--verbose` or
    /// `--quiet`, then configuration.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            dry_run: _,
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = (*level).into();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
