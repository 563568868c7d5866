//! Document store access.
//!
//! The store is an external collaborator. Handlers only see the
//! [`DocumentStore`] trait; the MongoDB and in-memory backends implement it
//! and [`StoreHandle`] owns the long-lived connection.

mod error;
mod handle;
mod memory;
mod mongo;
mod store;

pub use error::{StoreError, StoreResult};
pub use handle::{StoreHandle, establish_store};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DeleteOutcome, DocumentStore, Filter, InsertOutcome, ReplaceOutcome, object_id};
