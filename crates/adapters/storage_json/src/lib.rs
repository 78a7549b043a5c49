//! # stockroom-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole item collection lives in a single
//! pretty-printed JSON array on local disk.
//!
//! ## Responsibilities
//! - Implement the [`ItemStore`](stockroom_app::ports::ItemStore) port
//! - Create the backing file's parent directory once, at initialization
//! - Initialize a missing backing file to `[]` on first load
//! - Map IO and JSON failures into domain storage errors
//!
//! ## Dependency rule
//! Depends on `stockroom-app` (for the port trait) and `stockroom-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::{Config, JsonFileStore};
