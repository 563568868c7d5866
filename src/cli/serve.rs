//! Serve command
//!
//! Either validates the merged configuration and prints a summary, or runs
//! the HTTP server until shutdown.

use crate::config::{Environment, Settings, StoreBackend};
use crate::server::Server;

pub struct ServeCommand {
    config: Settings,
    environment: Environment,
}

impl ServeCommand {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            for line in self.dry_run_report()? {
                println!("{}", line);
            }
            return Ok(());
        }

        Server::new(self.config, self.environment).run().await
    }

    /// Lines printed by `serve --dry-run`. Never contains the store URI.
    pub fn dry_run_report(&self) -> anyhow::Result<Vec<String>> {
        self.config.validate()?;

        let store = match self.config.store.backend {
            StoreBackend::MongoDb => format!("mongodb (database '{}')", self.config.store.database),
            StoreBackend::Memory => "memory".to_string(),
        };

        Ok(vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Environment: {}", self.environment),
            format!("✓ Server would bind to: {}", self.config.server.address()),
            format!("✓ Store backend: {}", store),
            format!("✓ Log level: {}", self.config.logger.level),
            "Dry run completed successfully - configuration is ready for deployment".to_string(),
        ])
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
