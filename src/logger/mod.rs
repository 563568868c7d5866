//! Logger module
//!
//! Installs a `tracing-subscriber` registry with:
//! - Console output with color control
//! - File output in one of three formats (Full, Compact, JSON)

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use config::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use writer::LogFileWriter;

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_lowercase()))
        .map_err(|e| LoggerError::config(e.to_string()))?;

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // File layer goes first so console ANSI settings do not leak into the file.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::Init {
            message: e.to_string(),
        })
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(config: &FileConfig) -> Result<BoxedLayer, LoggerError> {
    let writer = LogFileWriter::new(config)?;

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_rejects_invalid_config() {
        let config = LoggerConfig {
            level: "chatty".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(init_logger(config), Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_init_logger_twice_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LoggerConfig {
            console: ConsoleConfig::new(false, false),
            file: FileConfig::new(true, dir.path().join("app.log"), false, LogFormat::Json)
                .unwrap(),
            level: "debug".to_string(),
        };

        // Whichever call installs first wins; a second install must error.
        let _ = init_logger(config.clone());
        assert!(matches!(init_logger(config), Err(LoggerError::Init { .. })));
    }
}
