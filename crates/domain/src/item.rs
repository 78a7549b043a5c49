//! Item — a single inventory record: an opaque JSON object plus an `id`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{IdsExhaustedError, ValidationError};
use crate::id::ItemId;

/// Name of the system-managed identifier field.
pub const ID_FIELD: &str = "id";

/// Caller-supplied item fields, already checked to be a non-empty JSON object.
///
/// Never contains an `id` key: whatever the caller sent under that name is
/// dropped, the store owns identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields(Map<String, Value>);

impl ItemFields {
    /// Parse a raw request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the body is empty, not JSON, not an
    /// object, or an object without any field.
    pub fn parse(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::MissingBody);
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::MalformedJson)?;
        Self::try_from(value)
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for ItemFields {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) if map.is_empty() => Err(ValidationError::EmptyObject),
            Value::Object(mut map) => {
                map.shift_remove(ID_FIELD);
                Ok(Self(map))
            }
            _ => Err(ValidationError::NotAnObject),
        }
    }
}

/// A stored inventory record.
///
/// Serializes as a flat JSON object with `id` first, followed by the
/// caller's fields in their original order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Item {
    pub id: ItemId,
    pub fields: ItemFields,
}

impl Item {
    /// Build an item from an id and validated fields.
    #[must_use]
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self { id, fields }
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields.as_map();
        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A stored object lacks a usable integer `id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored item has no unsigned integer `id` field")]
pub struct MissingIdError;

impl TryFrom<Map<String, Value>> for Item {
    type Error = MissingIdError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = map
            .shift_remove(ID_FIELD)
            .and_then(|value| value.as_u64())
            .map(ItemId::new)
            .ok_or(MissingIdError)?;
        Ok(Self {
            id,
            fields: ItemFields(map),
        })
    }
}

/// One entry of the stored collection.
///
/// Entries that do not carry an unsigned integer `id` cannot be addressed
/// through the API, but they are kept verbatim so a save never drops them.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Item(Item),
    Unindexed(Value),
}

impl Record {
    /// The addressable item, if any.
    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(item) => Some(item),
            Self::Unindexed(_) => None,
        }
    }

    #[must_use]
    pub fn into_item(self) -> Option<Item> {
        match self {
            Self::Item(item) => Some(item),
            Self::Unindexed(_) => None,
        }
    }
}

impl From<Item> for Record {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.get(ID_FIELD).and_then(Value::as_u64) {
                Some(id) => {
                    map.shift_remove(ID_FIELD);
                    Self::Item(Item::new(ItemId::new(id), ItemFields(map)))
                }
                None => Self::Unindexed(Value::Object(map)),
            },
            other => Self::Unindexed(other),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Item(item) => item.serialize(serializer),
            Self::Unindexed(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Compute the id for the next created item: `max(ids, default 0) + 1`.
///
/// Ids freed by deleting the current maximum are handed out again.
/// Unindexed records are ignored.
///
/// # Errors
///
/// Returns [`IdsExhaustedError`] when the highest id is already `u64::MAX`.
pub fn next_id(records: &[Record]) -> Result<ItemId, IdsExhaustedError> {
    records
        .iter()
        .filter_map(Record::as_item)
        .map(|item| item.id)
        .max()
        .unwrap_or(ItemId::new(0))
        .checked_next()
        .ok_or(IdsExhaustedError)
}

/// Index of the first item carrying `id`.
#[must_use]
pub fn position(records: &[Record], id: ItemId) -> Option<usize> {
    records
        .iter()
        .position(|record| record.as_item().is_some_and(|item| item.id == id))
}
