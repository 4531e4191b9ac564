//! Mock release catalog for testing.

use std::sync::{Arc, Mutex};

use crate::catalog::{CatalogError, RawRecord, ReleaseCatalog};

/// Mock implementation of the `ReleaseCatalog` trait.
///
/// Returns the configured rows for every search (no title matching) and
/// records the terms it was asked for.
///
/// # Example
///
/// ```rust,ignore
/// use rarsift_core::testing::{MockCatalog, fixtures};
///
/// let catalog = MockCatalog::new();
/// catalog.set_results(vec![fixtures::raw_record(1, "Heat", "movies", Some(1 << 30))]);
///
/// let rows = catalog.search("heat")?;
/// assert_eq!(rows.len(), 1);
/// assert_eq!(catalog.searched_terms(), vec!["heat".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    /// Configured rows to return.
    results: Arc<Mutex<Vec<RawRecord>>>,
    /// Recorded search terms.
    searches: Arc<Mutex<Vec<String>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<Mutex<Option<CatalogError>>>,
}

impl MockCatalog {
    /// Create a new mock catalog with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock catalog with predefined rows.
    pub fn with_results(results: Vec<RawRecord>) -> Self {
        let catalog = Self::new();
        catalog.set_results(results);
        catalog
    }

    /// Set the rows to return for subsequent searches.
    pub fn set_results(&self, results: Vec<RawRecord>) {
        *self.results.lock().unwrap() = results;
    }

    /// Get recorded search terms.
    pub fn searched_terms(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    /// Get the number of searches performed.
    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    /// Configure the next search to fail with the given error.
    pub fn set_next_error(&self, error: CatalogError) {
        *self.next_error.lock().unwrap() = Some(error);
    }
}

impl ReleaseCatalog for MockCatalog {
    fn search(&self, term: &str) -> Result<Vec<RawRecord>, CatalogError> {
        self.searches.lock().unwrap().push(term.to_string());

        if let Some(err) = self.next_error.lock().unwrap().take() {
            return Err(err);
        }

        Ok(self.results.lock().unwrap().clone())
    }
}
