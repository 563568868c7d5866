//! In-memory backend.
//!
//! Mirrors MongoDB result semantics closely enough for local runs and tests:
//! identifiers are fresh ObjectIds, and a replace with identical content
//! reports `modified_count == 0`.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{DeleteOutcome, DocumentStore, Filter, InsertOutcome, ReplaceOutcome, StoreResult};
use crate::models::Document;

/// Collection kept in process memory, in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore<D: Document> {
    documents: Arc<RwLock<Vec<D>>>,
}

impl<D: Document> Default for MemoryStore<D> {
    fn default() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<D: Document> MemoryStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for MemoryStore<D> {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<D>> {
        let documents = self.documents.read().await;
        let found = match filter {
            Filter::All => documents.clone(),
            Filter::ById(id) => documents
                .iter()
                .filter(|d| d.id() == Some(id))
                .cloned()
                .collect(),
        };
        Ok(found)
    }

    async fn insert_one(&self, mut document: D) -> StoreResult<InsertOutcome> {
        let id = document.id().unwrap_or_else(ObjectId::new);
        document.set_id(id);
        self.documents.write().await.push(document);
        tracing::debug!(collection = D::COLLECTION, id = %id, "inserted document");

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: Some(id),
        })
    }

    async fn replace_one(&self, id: ObjectId, mut document: D) -> StoreResult<ReplaceOutcome> {
        document.set_id(id);
        let mut documents = self.documents.write().await;
        let Some(existing) = documents.iter_mut().find(|d| d.id() == Some(id)) else {
            return Ok(ReplaceOutcome::default());
        };

        if *existing == document {
            return Ok(ReplaceOutcome {
                matched_count: 1,
                modified_count: 0,
            });
        }

        *existing = document;
        Ok(ReplaceOutcome {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        if let Some(position) = documents.iter().position(|d| d.id() == Some(id)) {
            documents.remove(position);
        }

        Ok(DeleteOutcome {
            deleted_count: (before - documents.len()) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;

    fn client(name: &str) -> Client {
        Client {
            id: None,
            name: name.to_string(),
            email: "a@b.co".to_string(),
            company: "Acme".to_string(),
            ipaddress: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_identifier() {
        let store = MemoryStore::<Client>::new();
        let outcome = store.insert_one(client("A")).await.unwrap();

        assert!(outcome.acknowledged);
        let id = outcome.inserted_id.unwrap();
        let found = store.find(Filter::ById(id)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(id));
        assert_eq!(found[0].name, "A");
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryStore::<Client>::new();
        store.insert_one(client("A")).await.unwrap();
        store.insert_one(client("B")).await.unwrap();

        let names: Vec<String> = store
            .find(Filter::All)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_replace_identical_reports_unmodified() {
        let store = MemoryStore::<Client>::new();
        let id = store.insert_one(client("A")).await.unwrap().inserted_id.unwrap();

        let outcome = store.replace_one(id, client("A")).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 0);

        let outcome = store.replace_one(id, client("A2")).await.unwrap();
        assert_eq!(outcome.modified_count, 1);
        assert_eq!(store.find(Filter::ById(id)).await.unwrap()[0].name, "A2");
    }

    #[tokio::test]
    async fn test_replace_missing_matches_nothing() {
        let store = MemoryStore::<Client>::new();
        let outcome = store.replace_one(ObjectId::new(), client("A")).await.unwrap();
        assert_eq!(outcome, ReplaceOutcome::default());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_replace_drops_omitted_fields() {
        let store = MemoryStore::<Client>::new();
        let mut with_ip = client("A");
        with_ip.ipaddress = Some("10.0.0.1".to_string());
        let id = store.insert_one(with_ip).await.unwrap().inserted_id.unwrap();

        store.replace_one(id, client("A")).await.unwrap();
        let stored = store.find(Filter::ById(id)).await.unwrap();
        assert_eq!(stored[0].ipaddress, None);
    }

    #[tokio::test]
    async fn test_delete_one() {
        let store = MemoryStore::<Client>::new();
        let id = store.insert_one(client("A")).await.unwrap().inserted_id.unwrap();

        assert_eq!(store.delete_one(id).await.unwrap().deleted_count, 1);
        assert_eq!(store.delete_one(id).await.unwrap().deleted_count, 0);
        assert_eq!(store.len().await, 0);
    }
}
