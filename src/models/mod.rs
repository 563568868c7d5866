//! Domain models persisted in the document store.
//!
//! Each model maps to one collection and carries the store-assigned
//! identifier in its `_id` field once persisted.

mod client;
mod swimming_tool;

pub use client::Client;
pub use swimming_tool::SwimmingTool;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, de::DeserializeOwned};

/// A document that lives in a named collection of the store.
pub trait Document:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + Unpin + std::fmt::Debug + 'static
{
    /// Name of the collection holding documents of this type.
    const COLLECTION: &'static str;

    /// Store-assigned identifier, `None` until the document is inserted.
    fn id(&self) -> Option<ObjectId>;

    /// Sets the store-assigned identifier.
    fn set_id(&mut self, id: ObjectId);
}
