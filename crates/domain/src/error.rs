//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `From`.

use crate::id::ItemId;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The caller sent data the domain refuses.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested item does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Every item id up to `u64::MAX` is already taken.
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhaustedError),

    /// The backing store failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections of caller-supplied item data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No request body was sent.
    #[error("invalid item data")]
    MissingBody,

    /// The body is not valid JSON.
    #[error("invalid item data")]
    MalformedJson,

    /// The body is JSON but not an object.
    #[error("invalid item data")]
    NotAnObject,

    /// The body is an object without any field.
    #[error("invalid item data")]
    EmptyObject,
}

/// No item carries the requested id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("item not found")]
pub struct NotFoundError {
    pub id: ItemId,
}

/// The highest stored id is `u64::MAX`, so `max + 1` has no value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no item id left to assign")]
pub struct IdsExhaustedError;
