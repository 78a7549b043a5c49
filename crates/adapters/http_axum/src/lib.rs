//! # stockroom-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON item API** (`/items`, `/items/{id}`)
//! - Serve the single-page front end at `/` and its assets under `/static`
//! - Map HTTP requests into [`ItemService`](stockroom_app::services::item_service::ItemService)
//!   calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `stockroom-app` (for the port trait and service) and `stockroom-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod page;
pub mod router;
pub mod state;
