//! Shared application state for axum handlers.

use std::sync::Arc;

use stockroom_app::ports::ItemStore;
use stockroom_app::services::item_service::ItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`.
pub struct AppState<S> {
    /// Item CRUD service.
    pub item_service: Arc<ItemService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ItemStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(item_service: ItemService<S>) -> Self {
        Self {
            item_service: Arc::new(item_service),
        }
    }
}
