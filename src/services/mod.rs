//! Service layer for business logic operations.
//!
//! Services sit between the handlers and the document store and translate
//! store outcomes into `AppError`s.

mod client_service;
mod swimming_tool_service;

pub use client_service::ClientService;
pub use swimming_tool_service::SwimmingToolService;

use crate::db::StoreHandle;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the collection stores sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub clients: ClientService,
    pub swimming_tools: SwimmingToolService,
}

impl Services {
    pub fn new(store: &StoreHandle) -> Self {
        Self {
            clients: ClientService::new(store.clients.clone()),
            swimming_tools: SwimmingToolService::new(store.swimming_tools.clone()),
        }
    }
}
