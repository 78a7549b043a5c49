//! # stockroom-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`ItemStore`](ports::ItemStore): load and save
//!   the whole item collection
//! - Define the driving use-cases in [`ItemService`](services::item_service::ItemService):
//!   list, get, create, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `stockroom-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
