mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::{
    query::LoadQuery,
    record::{Record, RecordId, TableId, TableMetadata},
};

///
/// RecordStore
///
/// Read contract over the backing content store. Implementations own all
/// storage, caching, and concurrency concerns; this crate only consumes the
/// four operations below.
///
/// `scope` selects one table, or every table when `None` (the content store
/// keeps records addressable across tables). Absence is `Ok(None)`, never an
/// error.
///

pub trait RecordStore {
    /// Code of the given table, if the table exists and carries one.
    fn table_code(&self, table: TableId) -> Result<Option<String>, StoreError>;

    /// Table metadata looked up by code.
    fn table_by_code(&self, code: &str) -> Result<Option<TableMetadata>, StoreError>;

    /// A single record by id.
    fn record_by_id(
        &self,
        scope: Option<TableId>,
        id: RecordId,
    ) -> Result<Option<Record>, StoreError>;

    /// First record matching the query, in query order.
    fn find_record(
        &self,
        scope: Option<TableId>,
        query: &LoadQuery,
    ) -> Result<Option<Record>, StoreError>;
}
