//! Application state for Axum web framework.

use crate::db::StoreHandle;
use crate::services::Services;

/// Shared state handed to every handler.
///
/// Cloning is cheap since both Services and StoreHandle use Arc internally.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Direct store access for health checks
    pub store: StoreHandle,
}

impl AppState {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            services: Services::new(&store),
            store,
        }
    }
}
