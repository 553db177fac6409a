//! Core vocabulary for Glossa: dynamic values, records and table metadata,
//! filter/sort/limit query primitives, and the `RecordStore` contract with
//! its in-memory reference implementation.

// public exports are one module level down
pub mod query;
pub mod record;
pub mod store;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, stores, and helpers are imported from their modules.
///

pub mod prelude {
    pub use crate::{
        query::{FilterExpr, LoadQuery, OrderDirection, SortExpr},
        record::{Record, RecordId, TableId, TableMetadata},
        value::{FieldValue, Value},
    };
}
