//! Testing utilities and mock implementations of the session collaborators.
//!
//! Lets the whole search-and-select loop run without a terminal, a catalog
//! file or a system clipboard.
//!
//! # Example
//!
//! ```rust,ignore
//! use rarsift_core::session::Session;
//! use rarsift_core::testing::{fixtures, MockCatalog, MockClipboard, RecordingSink, ScriptedConsole};
//!
//! let catalog = MockCatalog::with_results(vec![
//!     fixtures::raw_record(1, "Heat 1995", "movies_x264", Some(8 << 30)),
//! ]);
//! let console = ScriptedConsole::new(&["heat", "y", "1"]);
//! let sink = RecordingSink::new();
//! let clipboard = MockClipboard::new();
//!
//! let outcome = Session::new(&catalog, &console, &sink, &clipboard).run()?;
//! ```

mod mock_catalog;
mod mock_clipboard;
mod mock_console;
mod mock_sink;

pub use mock_catalog::MockCatalog;
pub use mock_clipboard::MockClipboard;
pub use mock_console::ScriptedConsole;
pub use mock_sink::RecordingSink;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::catalog::{CatalogError, RawRecord, SqliteCatalog};
    use crate::release::NormalizedRecord;

    /// Bytes in one GiB.
    pub const GIB: i64 = 1_073_741_824;

    /// Create a raw catalog row with reasonable defaults.
    ///
    /// The info hash is `hash<id>`.
    pub fn raw_record(id: i64, title: &str, category: &str, size_bytes: Option<i64>) -> RawRecord {
        RawRecord {
            id,
            info_hash: format!("hash{}", id),
            title: title.to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2019, 6, 1, 18, 30, 0).single(),
            category: category.to_string(),
            size_bytes,
        }
    }

    /// Create a normalized record directly, bypassing size conversion.
    pub fn normalized_record(id: i64, title: &str, category: &str, size_gib: f64) -> NormalizedRecord {
        NormalizedRecord {
            id,
            info_hash: format!("hash{}", id),
            title: title.to_string(),
            category: category.to_string(),
            size_gib,
        }
    }

    /// Insert rows into a catalog.
    pub fn seed_catalog(catalog: &SqliteCatalog, rows: &[RawRecord]) -> Result<(), CatalogError> {
        for row in rows {
            catalog.insert(row)?;
        }
        Ok(())
    }
}
