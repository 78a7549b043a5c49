//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use stockroom_domain::error::InventoryError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing, or creating a directory failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file holds something other than an array of items.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for InventoryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
