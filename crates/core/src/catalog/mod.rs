//! Release catalog - the local store of release metadata that searches run against.
//!
//! The catalog is read-only from the point of view of a search session: one
//! title search per run, returning raw rows in catalog order.

mod sqlite;
mod types;

pub use sqlite::{SqliteCatalog, DEFAULT_NAMESPACE};
pub use types::*;

/// Trait for release catalog lookups.
pub trait ReleaseCatalog {
    /// Search the catalog by title.
    ///
    /// Matches titles containing `term` case-insensitively, either as typed or
    /// with spaces replaced by dots, restricted to the catalog's category
    /// namespace. Rows come back in catalog (id) order.
    fn search(&self, term: &str) -> Result<Vec<RawRecord>, CatalogError>;
}
