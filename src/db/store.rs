use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{StoreError, StoreResult};
use crate::models::Document;

/// Selection passed to [`DocumentStore::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    ById(ObjectId),
}

/// Result of an insert. `acknowledged` is false when the store accepted the
/// call without confirming the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: Option<ObjectId>,
}

/// Result of a full-document replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    pub matched_count: u64,
    /// Zero when nothing matched or the replacement equals the stored document.
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Per-collection document store.
///
/// Every call is a single atomic store operation. Implementations must not
/// retry.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<D>>;

    async fn insert_one(&self, document: D) -> StoreResult<InsertOutcome>;

    async fn replace_one(&self, id: ObjectId, document: D) -> StoreResult<ReplaceOutcome>;

    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteOutcome>;
}

/// Converts a caller-supplied string to the store's key type.
pub fn object_id(raw: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| StoreError::InvalidIdentifier {
        value: raw.to_string(),
    })
}
