//! Item service — use-cases for managing inventory items.
//!
//! Every call is an independent load → compute → save round trip against the
//! [`ItemStore`]; nothing is cached between calls.

use stockroom_domain::error::{InventoryError, NotFoundError};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{self, Item, ItemFields, Record};

use crate::ports::ItemStore;

/// Application service for item CRUD operations.
pub struct ItemService<S> {
    store: S,
}

impl<S: ItemStore> ItemService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every stored record in insertion order, unindexed ones included.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_items(&self) -> Result<Vec<Record>, InventoryError> {
        self.store.load().await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn get_item(&self, id: ItemId) -> Result<Item, InventoryError> {
        self.store
            .load()
            .await?
            .into_iter()
            .filter_map(Record::into_item)
            .find(|item| item.id == id)
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Append a new item with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::IdsExhausted`] when the highest stored id is
    /// `u64::MAX`, or a storage error when loading or saving fails.
    pub async fn create_item(&self, fields: ItemFields) -> Result<Item, InventoryError> {
        let mut records = self.store.load().await?;
        let created = Item::new(item::next_id(&records)?, fields);
        records.push(created.clone().into());
        self.store.save(&records).await?;
        tracing::debug!(id = %created.id, "item created");
        Ok(created)
    }

    /// Replace every field of an existing item, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn update_item(
        &self,
        id: ItemId,
        fields: ItemFields,
    ) -> Result<Item, InventoryError> {
        let mut records = self.store.load().await?;
        let index = item::position(&records, id).ok_or(NotFoundError { id })?;
        let updated = Item::new(id, fields);
        records[index] = updated.clone().into();
        self.store.save(&records).await?;
        tracing::debug!(%id, "item replaced");
        Ok(updated)
    }

    /// Remove an item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn delete_item(&self, id: ItemId) -> Result<Item, InventoryError> {
        let mut records = self.store.load().await?;
        let index = item::position(&records, id).ok_or(NotFoundError { id })?;
        let deleted = records
            .remove(index)
            .into_item()
            .ok_or(NotFoundError { id })?;
        self.store.save(&records).await?;
        tracing::debug!(%id, "item deleted");
        Ok(deleted)
    }
}
