//! Filter descriptor layer.
//!
//! Raw, untrusted filter mappings are normalized here into typed criteria
//! before any predicate is built. Malformed entries are dropped, never
//! raised; see `normalize` for the exact leniency rules.

mod criterion;
mod input;
mod normalize;

pub use criterion::{Criterion, PriceBand};
pub use input::{FilterInput, FilterMap};
pub use normalize::{normalize, NormalizedFilters};
