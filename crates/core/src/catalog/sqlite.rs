//! SQLite-backed release catalog implementation.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OpenFlags};
use tracing::debug;

use super::{CatalogError, RawRecord, ReleaseCatalog};

/// Category prefix searches are restricted to unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "movie";

/// Timestamp layout used by the `items.dt` column.
const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQLite-backed release catalog.
///
/// Reads the `items` table of a release dump:
/// `items(id, hash, title, dt, cat, size, ...)`.
pub struct SqliteCatalog {
    conn: Connection,
    namespace: String,
}

impl SqliteCatalog {
    /// Open an existing catalog read-only.
    ///
    /// Fails if the file does not exist or has no `items` table.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| CatalogError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::verify_schema(&conn)?;
        debug!("Opened catalog at {:?}", path);
        Ok(Self {
            conn,
            namespace: DEFAULT_NAMESPACE.to_string(),
        })
    }

    /// Create (or open read-write) a catalog file, creating the `items` table if needed.
    pub fn create(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn,
            namespace: DEFAULT_NAMESPACE.to_string(),
        })
    }

    /// Create an in-memory SQLite catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn,
            namespace: DEFAULT_NAMESPACE.to_string(),
        })
    }

    /// Restrict searches to categories starting with `namespace`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// The category prefix searches are restricted to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Insert one record. Fails on a duplicate id.
    pub fn insert(&self, record: &RawRecord) -> Result<(), CatalogError> {
        let dt = record
            .uploaded_at
            .map(|at| at.format(DT_FORMAT).to_string());

        self.conn
            .execute(
                "INSERT INTO items (id, hash, title, dt, cat, size) VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    record.id,
                    &record.info_hash,
                    &record.title,
                    dt,
                    &record.category,
                    record.size_bytes,
                ],
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                hash TEXT NOT NULL,
                title TEXT NOT NULL,
                dt TEXT,
                cat TEXT NOT NULL,
                size INTEGER,
                ext_id TEXT,
                imdb TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_items_title ON items(title);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    fn verify_schema(conn: &Connection) -> Result<(), CatalogError> {
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'items'",
                [],
                |row| row.get(0),
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        if tables == 0 {
            return Err(CatalogError::Schema("missing table `items`".to_string()));
        }
        Ok(())
    }

    fn row_to_raw_record(row: &rusqlite::Row) -> rusqlite::Result<RawRecord> {
        let dt: Option<String> = row.get(3)?;

        Ok(RawRecord {
            id: row.get(0)?,
            info_hash: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            uploaded_at: dt.as_deref().and_then(parse_uploaded_at),
            category: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            size_bytes: row.get(5)?,
        })
    }
}

impl ReleaseCatalog for SqliteCatalog {
    fn search(&self, term: &str) -> Result<Vec<RawRecord>, CatalogError> {
        let plain = format!("%{}%", escape_like(term));
        let dotted = format!("%{}%", escape_like(&term.replace(' ', ".")));
        let namespace = format!("{}%", escape_like(&self.namespace));

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, hash, title, dt, cat, size
                 FROM items
                 WHERE (title LIKE ?1 ESCAPE '\\' OR title LIKE ?2 ESCAPE '\\')
                   AND cat LIKE ?3 ESCAPE '\\'
                 ORDER BY id",
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![&plain, &dotted, &namespace], Self::row_to_raw_record)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }

        debug!(
            "Catalog search for {:?} in namespace {:?} returned {} rows",
            term,
            self.namespace,
            results.len()
        );
        Ok(results)
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn parse_uploaded_at(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DT_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        })
}
