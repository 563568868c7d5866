//! Store handle lifecycle.
//!
//! The handle is opened once at startup, cloned into application state and
//! closed after the server stops accepting requests.

use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client as MongoClient, Database};

use super::{DocumentStore, MemoryStore, MongoStore, StoreError, StoreResult};
use crate::config::{StoreBackend, StoreConfig};
use crate::models::{Client, SwimmingTool};

/// Live connection behind the collection stores.
#[derive(Clone)]
enum Connection {
    Mongo { client: MongoClient, database: Database },
    Memory,
    /// Stores supplied by the caller; nothing to ping or close.
    Detached,
}

/// Shared store handle holding one [`DocumentStore`] per collection.
///
/// Cloning is cheap: collection stores sit behind `Arc` and the MongoDB
/// client is reference counted.
#[derive(Clone)]
pub struct StoreHandle {
    pub clients: Arc<dyn DocumentStore<Client>>,
    pub swimming_tools: Arc<dyn DocumentStore<SwimmingTool>>,
    connection: Connection,
}

impl StoreHandle {
    /// Builds a handle over caller-provided collection stores.
    pub fn new(
        clients: Arc<dyn DocumentStore<Client>>,
        swimming_tools: Arc<dyn DocumentStore<SwimmingTool>>,
    ) -> Self {
        Self {
            clients,
            swimming_tools,
            connection: Connection::Detached,
        }
    }

    /// Handle backed by empty in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            clients: Arc::new(MemoryStore::<Client>::new()),
            swimming_tools: Arc::new(MemoryStore::<SwimmingTool>::new()),
            connection: Connection::Memory,
        }
    }

    /// Connects to MongoDB and binds the collection stores to `database`.
    pub async fn connect_mongo(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(config.uri.as_str())
            .await
            .map_err(|e| StoreError::Connection {
                message: format!("invalid connection string: {}", e),
            })?;
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

        let client = MongoClient::with_options(options).map_err(|e| StoreError::Connection {
            message: e.to_string(),
        })?;
        let database = client.database(&config.database);

        Ok(Self {
            clients: Arc::new(MongoStore::<Client>::new(&database)),
            swimming_tools: Arc::new(MongoStore::<SwimmingTool>::new(&database)),
            connection: Connection::Mongo { client, database },
        })
    }

    /// Name of the active backend, for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self.connection {
            Connection::Mongo { .. } => "mongodb",
            Connection::Memory => "memory",
            Connection::Detached => "detached",
        }
    }

    /// Round-trips to the store.
    pub async fn ping(&self) -> StoreResult<()> {
        match &self.connection {
            Connection::Mongo { database, .. } => {
                database
                    .run_command(doc! { "ping": 1 })
                    .await
                    .map_err(|e| StoreError::Connection {
                        message: e.to_string(),
                    })?;
                Ok(())
            }
            Connection::Memory | Connection::Detached => Ok(()),
        }
    }

    /// Closes the underlying connection. In-flight operations on clones of
    /// this handle fail afterwards.
    pub async fn close(self) {
        if let Connection::Mongo { client, .. } = self.connection {
            client.shutdown().await;
            tracing::info!("MongoDB connection closed");
        }
    }
}

/// Opens the store selected by `config.backend`.
///
/// For MongoDB the connection is verified with a ping so that a bad URI
/// fails at startup instead of on the first request.
pub async fn establish_store(config: &StoreConfig) -> StoreResult<StoreHandle> {
    match config.backend {
        StoreBackend::MongoDb => {
            let handle = StoreHandle::connect_mongo(config).await?;
            handle.ping().await?;
            tracing::info!(database = %config.database, "Connected to MongoDB");
            Ok(handle)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(StoreHandle::in_memory())
        }
    }
}
