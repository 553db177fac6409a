//! ## Crate layout
//! - `core`: records, values, query primitives, and the `RecordStore` seam.
//! - `config`: resolver configuration and the conventional field names.
//! - `error`: public failure taxonomy.
//! - `resolver`: the translation resolution pipeline.
//!
//! The `prelude` module mirrors the surface a caller needs to wire a store
//! and resolve translations.

pub use glossa_core as core;

pub mod config;
pub mod error;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::Error;
pub use resolver::{Resolution, TranslationResolver};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, Resolution, ResolverConfig, TranslationResolver,
        core::{
            query::{Cmp, FilterExpr, LoadQuery, OrderDirection, SortExpr},
            record::{Record, RecordId, TableId, TableMetadata},
            store::{MemoryStore, RecordStore, StoreError},
            value::{FieldValue, Value},
        },
    };
}
