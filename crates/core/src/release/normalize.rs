//! Raw catalog row -> display record conversion.
//!
//! Rules run in order and the first match rejects:
//! 1. missing or non-positive size
//! 2. adult-content category (policy, independent of user filters)
//!
//! Surviving rows get their size converted to binary gigabytes, rounded
//! half-up to 2 decimals.

use crate::catalog::RawRecord;

use super::{NormalizedRecord, Rejection};

/// Bytes per binary gigabyte (2^30).
pub const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// Category values treated as adult content (compared case-insensitively).
pub const ADULT_CATEGORY_MARKERS: &[&str] = &["xxx"];

/// Normalize one raw catalog row.
pub fn normalize(raw: &RawRecord) -> Result<NormalizedRecord, Rejection> {
    let size_bytes = match raw.size_bytes {
        Some(size) if size > 0 => size,
        _ => return Err(Rejection::MissingSize),
    };

    if is_adult_category(&raw.category) {
        return Err(Rejection::AdultContent);
    }

    let size_gib = bytes_to_gib(size_bytes);
    if size_gib <= 0.0 {
        return Err(Rejection::MissingSize);
    }

    Ok(NormalizedRecord {
        id: raw.id,
        info_hash: raw.info_hash.clone(),
        title: raw.title.clone(),
        category: raw.category.clone(),
        size_gib,
    })
}

/// Convert bytes to GiB, rounded half-up to 2 decimal places.
pub fn bytes_to_gib(size_bytes: i64) -> f64 {
    round_half_up_2dp(size_bytes as f64 / BYTES_PER_GIB)
}

fn round_half_up_2dp(value: f64) -> f64 {
    // f64::round goes away from zero on ties, which is half-up for the
    // non-negative values seen here.
    (value * 100.0).round() / 100.0
}

fn is_adult_category(category: &str) -> bool {
    let category = category.trim();
    ADULT_CATEGORY_MARKERS
        .iter()
        .any(|marker| category.eq_ignore_ascii_case(marker))
}
