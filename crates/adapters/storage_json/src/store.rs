//! JSON file implementation of [`ItemStore`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_app::ports::ItemStore;
use stockroom_domain::error::InventoryError;
use stockroom_domain::item::Record;

use crate::error::StorageError;

/// Configuration for the JSON file storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the backing file (e.g. `data/items.json`).
    pub data_file: PathBuf,
    /// Surface read and parse failures instead of substituting an empty
    /// collection.
    pub strict_reads: bool,
}

impl Config {
    /// Build a [`JsonFileStore`] from this configuration.
    ///
    /// Creates the parent directory of the backing file if it is missing.
    /// The file itself is created lazily, on the first load.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn build(self) -> Result<JsonFileStore, StorageError> {
        let parent = self
            .data_file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty());
        if let Some(parent) = parent {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tracing::debug!(path = %self.data_file.display(), "json item store ready");
        Ok(JsonFileStore {
            path: self.data_file,
            strict_reads: self.strict_reads,
        })
    }
}

/// Item store backed by one JSON document holding an array of objects.
///
/// No locking: each call is an independent whole-file read or write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    strict_reads: bool,
}

impl JsonFileStore {
    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Record>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "backing file missing, initializing empty collection");
                if let Err(err) = self.write(&[]).await {
                    tracing::error!(error = %err, "unable to initialize backing file");
                }
                Ok(Vec::new())
            }
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    async fn write(&self, records: &[Record]) -> Result<(), StorageError> {
        let bytes = to_pretty_json(records).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Four-space indented JSON, non-ASCII characters written as-is.
fn to_pretty_json(records: &[Record]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> impl Future<Output = Result<Vec<Record>, InventoryError>> + Send {
        async move {
            match self.read().await {
                Ok(records) => {
                    let unindexed = records.iter().filter(|r| r.as_item().is_none()).count();
                    if unindexed > 0 {
                        tracing::warn!(
                            unindexed,
                            "stored entries without an integer id are kept as-is"
                        );
                    }
                    tracing::debug!(count = records.len(), "items loaded");
                    Ok(records)
                }
                Err(err) if self.strict_reads => Err(err.into()),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load items, using empty collection");
                    Ok(Vec::new())
                }
            }
        }
    }

    fn save(&self, records: &[Record]) -> impl Future<Output = Result<(), InventoryError>> + Send {
        async move {
            self.write(records).await.map_err(|err| {
                tracing::error!(error = %err, "failed to save items");
                InventoryError::from(err)
            })?;
            tracing::debug!(count = records.len(), "items saved");
            Ok(())
        }
    }
}
