//! Storage port — whole-collection persistence for items.

use std::future::Future;

use stockroom_domain::error::InventoryError;
use stockroom_domain::item::Record;

/// Reads and writes the complete item collection.
///
/// There is no partial access: every call moves the entire collection.
/// Implementations are not required to coordinate concurrent callers, so a
/// `load` → `save` pair from two requests may interleave and lose an update.
pub trait ItemStore {
    /// Read every stored record, in insertion order.
    fn load(&self) -> impl Future<Output = Result<Vec<Record>, InventoryError>> + Send;

    /// Overwrite the stored collection with `records`.
    fn save(&self, records: &[Record]) -> impl Future<Output = Result<(), InventoryError>> + Send;
}
