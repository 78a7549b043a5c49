//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use stockroom_app::ports::ItemStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the item API with the index page at `/` and serves front-end
/// assets from `static_dir` under `/static`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>, static_dir: &Path) -> Router
where
    S: ItemStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::page::index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
