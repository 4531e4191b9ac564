//! Inclusion/exclusion rules over normalized records.

use tracing::debug;

use crate::catalog::RawRecord;
use crate::release::{normalize, NormalizedRecord, ResultSet};

use super::{Exclusion, FilterSettings};

/// Category marker for ultra-HD releases.
pub const ULTRA_HD_MARKER: &str = "4k";
/// Category marker for 720p releases.
pub const MARKER_720P: &str = "720";
/// Category/title marker for 480p releases.
pub const MARKER_480P: &str = "480";
/// Category marker for the legacy XviD codec.
pub const LEGACY_CODEC_MARKER: &str = "xvid";

/// Return the first rule that excludes `record`, or `None` if it passes.
///
/// In ultra-HD mode only the 4K check runs. Otherwise the 720p, 480p and
/// legacy-codec toggles are checked in that order. The 480p rule looks at
/// the title as well as the category; the others look at the category only.
pub fn evaluate(record: &NormalizedRecord, filters: FilterSettings) -> Option<Exclusion> {
    let category = record.category.to_lowercase();

    if filters.only_ultra_hd {
        return if category.contains(ULTRA_HD_MARKER) {
            None
        } else {
            Some(Exclusion::NotUltraHd)
        };
    }

    if !filters.allow_720p && category.contains(MARKER_720P) {
        return Some(Exclusion::Resolution720p);
    }

    if !filters.allow_480p
        && (category.contains(MARKER_480P) || record.title.contains(MARKER_480P))
    {
        return Some(Exclusion::Resolution480p);
    }

    if !filters.allow_legacy_codec && category.contains(LEGACY_CODEC_MARKER) {
        return Some(Exclusion::LegacyCodec);
    }

    None
}

/// Whether `record` satisfies `filters`.
pub fn passes(record: &NormalizedRecord, filters: FilterSettings) -> bool {
    evaluate(record, filters).is_none()
}

/// Run the filter over a batch of normalized records, keeping order.
pub fn apply<I>(records: I, filters: FilterSettings) -> ResultSet
where
    I: IntoIterator<Item = NormalizedRecord>,
{
    records
        .into_iter()
        .filter(|record| match evaluate(record, filters) {
            Some(exclusion) => {
                debug!(id = record.id, reason = exclusion.as_str(), "Record filtered out");
                false
            }
            None => true,
        })
        .collect()
}

/// Normalize then filter raw catalog rows into a result set.
pub fn sift(raw: &[RawRecord], filters: FilterSettings) -> ResultSet {
    let normalized: Vec<NormalizedRecord> = raw
        .iter()
        .filter_map(|row| match normalize(row) {
            Ok(record) => Some(record),
            Err(rejection) => {
                debug!(id = row.id, reason = rejection.as_str(), "Record rejected");
                None
            }
        })
        .collect();
    let normalized_count = normalized.len();

    let results = apply(normalized, filters);
    debug!(
        raw = raw.len(),
        normalized = normalized_count,
        kept = results.len(),
        "Filter pass complete"
    );
    results
}
