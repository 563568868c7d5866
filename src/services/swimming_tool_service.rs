//! Swimming tool service.
//!
//! Read and delete take the raw path identifier and convert it at the store
//! boundary, so an unparsable identifier is a store failure (500) here
//! rather than a 400.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::db::{object_id, DocumentStore, Filter};
use crate::error::{AppError, AppResult};
use crate::models::SwimmingTool;

#[derive(Clone)]
pub struct SwimmingToolService {
    store: Arc<dyn DocumentStore<SwimmingTool>>,
}

impl SwimmingToolService {
    pub fn new(store: Arc<dyn DocumentStore<SwimmingTool>>) -> Self {
        Self { store }
    }

    pub async fn list_tools(&self) -> AppResult<Vec<SwimmingTool>> {
        Ok(self.store.find(Filter::All).await?)
    }

    pub async fn get_tool(&self, raw_id: &str) -> AppResult<SwimmingTool> {
        let id = object_id(raw_id)?;
        self.store
            .find(Filter::ById(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("Swimming tool not found"))
    }

    pub async fn create_tool(&self, tool: SwimmingTool) -> AppResult<()> {
        let outcome = self.store.insert_one(tool).await?;
        if !outcome.acknowledged {
            return Err(AppError::raw("Error occurred while creating the swimming tool."));
        }
        tracing::info!(id = ?outcome.inserted_id, "Swimming tool created");
        Ok(())
    }

    pub async fn replace_tool(&self, id: ObjectId, tool: SwimmingTool) -> AppResult<()> {
        let outcome = self
            .store
            .replace_one(id, tool)
            .await
            .map_err(AppError::store("Error occurred while updating the swimming tool."))?;

        if outcome.modified_count == 0 {
            return Err(AppError::not_found(
                "Swimming tool not found or data not modified.",
            ));
        }
        Ok(())
    }

    /// Deleting nothing is reported as a failure, not as not-found.
    pub async fn delete_tool(&self, raw_id: &str) -> AppResult<()> {
        let id = object_id(raw_id)?;
        let outcome = self.store.delete_one(id).await?;
        if outcome.deleted_count == 0 {
            return Err(AppError::raw("Error occurred while deleting the swimming tool."));
        }
        Ok(())
    }
}
