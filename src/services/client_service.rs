//! Client service.
//!
//! Maps store outcomes for the `clients` collection onto API results.
//! Inputs arrive already validated.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::db::{DocumentStore, Filter};
use crate::error::{AppError, AppResult};
use crate::models::Client;

#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn DocumentStore<Client>>,
}

impl ClientService {
    pub fn new(store: Arc<dyn DocumentStore<Client>>) -> Self {
        Self { store }
    }

    pub async fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.store
            .find(Filter::All)
            .await
            .map_err(AppError::store("Error occurred while retrieving clients."))
    }

    /// Returns the first match; zero matches is `NotFound`.
    pub async fn get_client(&self, id: ObjectId) -> AppResult<Client> {
        self.store
            .find(Filter::ById(id))
            .await
            .map_err(AppError::store("Error occurred while retrieving the client."))?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("Client not found"))
    }

    pub async fn create_client(&self, client: Client) -> AppResult<()> {
        let outcome = self
            .store
            .insert_one(client)
            .await
            .map_err(AppError::store("Error occurred while creating the client."))?;

        if !outcome.acknowledged {
            return Err(AppError::internal("Error occurred while creating the client."));
        }
        tracing::info!(id = ?outcome.inserted_id, "Client created");
        Ok(())
    }

    /// Full replace. An unchanged document counts as not found.
    pub async fn replace_client(&self, id: ObjectId, client: Client) -> AppResult<()> {
        let outcome = self
            .store
            .replace_one(id, client)
            .await
            .map_err(AppError::store("Error occurred while updating the client."))?;

        if outcome.modified_count == 0 {
            return Err(AppError::not_found("Client not found or data not modified."));
        }
        Ok(())
    }

    pub async fn delete_client(&self, id: ObjectId) -> AppResult<()> {
        let outcome = self
            .store
            .delete_one(id)
            .await
            .map_err(AppError::store("Error occurred while deleting the client."))?;

        if outcome.deleted_count == 0 {
            return Err(AppError::not_found("Client not found."));
        }
        Ok(())
    }
}
