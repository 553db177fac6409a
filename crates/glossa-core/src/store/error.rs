use crate::record::TableId;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Backend failure taxonomy for [`RecordStore`](crate::store::RecordStore)
/// implementations. A missing row or table is not an error; read operations
/// report absence as `Ok(None)`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum StoreError {
    #[error("unknown table: {table}")]
    UnknownTable { table: TableId },

    #[error("duplicate table code: {code}")]
    DuplicateTableCode { code: String },

    #[error("store corruption: {message}")]
    Corrupt { message: String },
}
