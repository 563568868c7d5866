//! MongoDB backend.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document as BsonDocument, doc, oid::ObjectId};
use mongodb::options::{Acknowledgment, WriteConcern};
use mongodb::{Collection, Database};

use super::{DeleteOutcome, DocumentStore, Filter, InsertOutcome, ReplaceOutcome, StoreError, StoreResult};
use crate::models::Document;

/// Typed view over one MongoDB collection.
///
/// `mongodb::Collection` shares the client's connection pool, so cloning is
/// cheap.
#[derive(Debug, Clone)]
pub struct MongoStore<D: Document> {
    collection: Collection<D>,
}

impl<D: Document> MongoStore<D> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<D>(D::COLLECTION),
        }
    }

    fn by_id(id: ObjectId) -> BsonDocument {
        doc! { "_id": id }
    }
}

/// Whether the server confirms writes made under `concern`. No concern
/// means the server default, which confirms them.
fn acknowledges_writes(concern: Option<&WriteConcern>) -> bool {
    concern.is_none_or(|c| c.w != Some(Acknowledgment::Nodes(0)) || c.journal == Some(true))
}

#[async_trait]
impl<D: Document> DocumentStore<D> for MongoStore<D> {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<D>> {
        let query = match filter {
            Filter::All => doc! {},
            Filter::ById(id) => Self::by_id(id),
        };
        tracing::debug!(collection = D::COLLECTION, filter = ?filter, "find");

        let cursor = self
            .collection
            .find(query)
            .await
            .map_err(|e| StoreError::operation("find", D::COLLECTION, e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::operation("find", D::COLLECTION, e))
    }

    async fn insert_one(&self, document: D) -> StoreResult<InsertOutcome> {
        tracing::debug!(collection = D::COLLECTION, "insert_one");
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|e| StoreError::operation("insert_one", D::COLLECTION, e))?;

        Ok(InsertOutcome {
            acknowledged: acknowledges_writes(self.collection.write_concern()),
            inserted_id: result.inserted_id.as_object_id(),
        })
    }

    async fn replace_one(&self, id: ObjectId, document: D) -> StoreResult<ReplaceOutcome> {
        tracing::debug!(collection = D::COLLECTION, id = %id, "replace_one");
        let result = self
            .collection
            .replace_one(Self::by_id(id), document)
            .await
            .map_err(|e| StoreError::operation("replace_one", D::COLLECTION, e))?;

        Ok(ReplaceOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        tracing::debug!(collection = D::COLLECTION, id = %id, "delete_one");
        let result = self
            .collection
            .delete_one(Self::by_id(id))
            .await
            .map_err(|e| StoreError::operation("delete_one", D::COLLECTION, e))?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
