//! Types for the release catalog.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One release entry exactly as the catalog stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Stable catalog id (primary key).
    pub id: i64,
    /// BitTorrent info hash, as stored (usually hex).
    pub info_hash: String,
    /// Release title (scene-style, dots or spaces).
    pub title: String,
    /// Upload timestamp. `None` when the stored text is missing or unparseable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Category string, e.g. "movies_x264_720p".
    pub category: String,
    /// Total size in bytes. Older entries may not have one.
    #[serde(default)]
    pub size_bytes: Option<i64>,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog at {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("Catalog schema error: {0}")]
    Schema(String),

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_raw_record_serialization() {
        let record = RawRecord {
            id: 42,
            info_hash: "abc123".to_string(),
            title: "Some.Film.2019.1080p".to_string(),
            uploaded_at: Some(Utc.with_ymd_and_hms(2019, 5, 1, 12, 0, 0).unwrap()),
            category: "movies_x264".to_string(),
            size_bytes: Some(1024),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: RawRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_raw_record_missing_date_is_skipped() {
        let record = RawRecord {
            id: 1,
            info_hash: "abc".to_string(),
            title: "t".to_string(),
            uploaded_at: None,
            category: "movies".to_string(),
            size_bytes: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("uploaded_at"));
        assert!(json.contains("\"size_bytes\":null"));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Open {
            path: PathBuf::from("/tmp/nope.sqlite"),
            reason: "unable to open database file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open catalog at /tmp/nope.sqlite: unable to open database file"
        );
    }
}
