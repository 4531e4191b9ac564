//! Filter settings and exclusion reasons.

use serde::{Deserialize, Serialize};

/// User-chosen display filters for one search.
///
/// `only_ultra_hd` is an opt-in override: when set, the other three flags
/// are ignored. The rest are independent opt-out toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub only_ultra_hd: bool,
    pub allow_720p: bool,
    pub allow_480p: bool,
    pub allow_legacy_codec: bool,
}

impl FilterSettings {
    /// Everything allowed, no 4K restriction.
    pub fn permissive() -> Self {
        Self {
            only_ultra_hd: false,
            allow_720p: true,
            allow_480p: true,
            allow_legacy_codec: true,
        }
    }

    /// Nothing opted in yet. This is where the filter questions start.
    pub fn restrictive() -> Self {
        Self {
            only_ultra_hd: false,
            allow_720p: false,
            allow_480p: false,
            allow_legacy_codec: false,
        }
    }

    /// Only 4K releases. The remaining flags are irrelevant in this mode.
    pub fn ultra_hd_only() -> Self {
        Self {
            only_ultra_hd: true,
            ..Self::permissive()
        }
    }
}

/// The rule that kept a record out of the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
    /// Ultra-HD mode and the category has no 4K marker.
    NotUltraHd,
    /// 720p category while 720p is not allowed.
    #[serde(rename = "resolution_720p")]
    Resolution720p,
    /// 480p category or title while 480p is not allowed.
    #[serde(rename = "resolution_480p")]
    Resolution480p,
    /// XviD category while legacy codecs are not allowed.
    LegacyCodec,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::NotUltraHd => "not_ultra_hd",
            Exclusion::Resolution720p => "resolution_720p",
            Exclusion::Resolution480p => "resolution_480p",
            Exclusion::LegacyCodec => "legacy_codec",
        }
    }
}
