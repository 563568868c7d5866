//! Configuration validation logic
//!
//! Validation runs after all layers are merged, so each rule sees the final
//! value regardless of which source supplied it.

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, LoggerSettings, ServerConfig, Settings, StoreBackend, StoreConfig,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Connection string schemes understood by the MongoDB driver
const MONGODB_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be blank
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 127.0.0.1 for local access or 0.0.0.0 for all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl StoreConfig {
    /// Validate store configuration
    ///
    /// The connection string is only checked for the MongoDB backend; the
    /// in-memory backend ignores it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::validation(
                "store.database",
                "Database name is required.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "store.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.backend == StoreBackend::MongoDb {
            if self.uri.is_empty() {
                return Err(ConfigError::validation(
                    "store.uri",
                    "MongoDB connection string is required when backend is \"mongodb\".",
                ));
            }

            if !MONGODB_SCHEMES
                .iter()
                .any(|scheme| self.uri.starts_with(scheme))
            {
                return Err(ConfigError::validation(
                    "store.uri",
                    format!(
                        "Invalid MongoDB connection string. Expected one of: {}",
                        MONGODB_SCHEMES.join(", ")
                    ),
                ));
            }
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        self.parse_format()?;
        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console or file output must be enabled
    /// - File path must be set when file output is enabled
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
