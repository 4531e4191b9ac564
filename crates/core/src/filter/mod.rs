//! Filter engine: which normalized records are shown for a search.
//!
//! Filtering is a conjunction of independent opt-out toggles (720p, 480p,
//! legacy codec), except ultra-HD mode, which is an opt-in override that
//! ignores the toggles. Exclusions are outcomes, never errors.

mod engine;
mod types;

pub use engine::{
    apply, evaluate, passes, sift, LEGACY_CODEC_MARKER, MARKER_480P, MARKER_720P,
    ULTRA_HD_MARKER,
};
pub use types::{Exclusion, FilterSettings};
