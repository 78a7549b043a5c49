//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::routing::get;

use stockroom_app::ports::ItemStore;

use crate::state::AppState;

/// Build the item API sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ItemStore + Send + Sync + 'static,
{
    Router::new()
        .route("/items", get(items::list::<S>).post(items::create::<S>))
        .route(
            "/items/{id}",
            get(items::get::<S>)
                .put(items::update::<S>)
                .delete(items::delete::<S>)
                .fallback(items::unsupported_method),
        )
}
