//! Storage collaborator boundary.
//!
//! The engine consumes relations through `CatalogSource` and never talks to
//! a concrete store. `MemorySource` is the canonical in-process
//! implementation; relational integrations can instead translate the
//! assembled `ItemQuery` value into native pushdown.

mod memory;

pub use memory::MemorySource;

use crate::record::{AttributeRow, CategoryRecord, ItemRecord};
use thiserror::Error as ThisError;

///
/// SourceError
///
/// Storage-layer failure. Propagated to callers unchanged; this subsystem
/// adds no retry or recovery logic.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// CatalogSource
///
/// Read-only access to the three catalog relations. Implementations expose
/// full scans; filtering, aggregation, ordering, and paging are applied by
/// the executor.
///

pub trait CatalogSource {
    /// The item relation.
    fn items(&self) -> Result<Vec<ItemRecord>, SourceError>;

    /// The EAV attribute fact relation.
    fn attributes(&self) -> Result<Vec<AttributeRow>, SourceError>;

    /// The category relation.
    fn categories(&self) -> Result<Vec<CategoryRecord>, SourceError>;
}
