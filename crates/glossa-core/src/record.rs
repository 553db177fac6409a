use crate::value::{FieldValue, Value};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// TableId
/// Identifies a table in the backing store.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct TableId(pub i64);

impl FieldValue for TableId {
    fn to_value(&self) -> Value {
        Value::Int(self.0)
    }
}

///
/// RecordId
/// Identifies a record within its table.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct RecordId(pub i64);

impl FieldValue for RecordId {
    fn to_value(&self) -> Value {
        Value::Int(self.0)
    }
}

///
/// Record
///
/// A row as returned by the store: its id, the table that owns it, and a
/// dynamic field map. The owning table is always known; elements, languages,
/// and translation rows are all plain records distinguished by their table.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub table: TableId,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: RecordId, table: TableId) -> Self {
        Self {
            id,
            table,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment, used heavily by fixtures.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl FieldValue) -> Self {
        self.fields.insert(name.into(), value.to_value());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Addressable value for filters and sorts.
    ///
    /// `"id"` resolves to the record id; every other name resolves through
    /// the field map.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<Value> {
        if name == "id" {
            Some(Value::Int(self.id.0))
        } else {
            self.fields.get(name).cloned()
        }
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_text)
    }

    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_int)
    }

    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(Value::as_bool)
    }
}

///
/// TableMetadata
///
/// Identity of a table in the catalog. `code` is the conventional string
/// handle other tables are derived from; a table without a code cannot take
/// part in convention-based derivation.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableMetadata {
    pub id: TableId,
    pub code: Option<String>,
}

impl TableMetadata {
    #[must_use]
    pub fn new(id: TableId, code: impl Into<String>) -> Self {
        Self {
            id,
            code: Some(code.into()),
        }
    }

    /// A table registered without a code.
    #[must_use]
    pub const fn uncoded(id: TableId) -> Self {
        Self { id, code: None }
    }
}

///
/// TESTS
///
