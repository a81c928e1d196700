//! Faceted: a faceted filter query compiler and read API for EAV catalogs.
//!
//! ## Crate layout
//! - `core` (re-export of `faceted-core`): values, records, filter
//!   normalization, predicates, query assembly, execution, observability.
//! - `catalog`: the request-scoped read API session.
//! - `view`: caller-facing projections of items and categories.
//! - `options`: listing/pagination options.
//! - `lookup`: explicit id-or-slug lookup keys.
//! - `error`: public error taxonomy.
//!
//! The `prelude` module mirrors the surface used by typical callers.

pub use faceted_core as core;

mod catalog;
mod error;
mod lookup;
mod options;
mod view;

pub use catalog::Catalog;
pub use error::{Error, ErrorKind};
pub use lookup::Lookup;
pub use options::{CategoryListOptions, ItemListOptions, PageRequest};
pub use view::{CategoryNode, CategoryView, ItemView};

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
        Catalog, CategoryListOptions, CategoryNode, CategoryView, Error, ErrorKind,
        ItemListOptions, ItemView, Lookup, PageRequest,
    };
    pub use faceted_core::prelude::*;
}
