//! Display-ready release types.

use serde::{Deserialize, Serialize};

/// A catalog row that passed normalization: validated and size-converted.
///
/// Only [`normalize`](super::normalize) constructs these, so `size_gib` is
/// always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: i64,
    pub info_hash: String,
    pub title: String,
    pub category: String,
    /// Size in binary gigabytes, rounded to 2 decimals.
    pub size_gib: f64,
}

/// Why a catalog row was dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// No size, a non-positive size, or one too small to show at 2 decimals.
    MissingSize,
    /// Category is an adult-content marker.
    AdultContent,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingSize => "missing_size",
            Rejection::AdultContent => "adult_content",
        }
    }
}
