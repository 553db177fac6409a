use glossa_core::store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
///
/// Public failure taxonomy. A legitimately absent translation is never an
/// error; it surfaces as [`Resolution::NotFound`](crate::Resolution).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum Error {
    /// Malformed input: missing or unresolvable element id.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Structural misconfiguration: unresolvable language, or a resolvable
    /// primary table whose translation table does not exist.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// Backend failure surfaced from the record store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }
}
