//! Session states and outcomes.

use crate::catalog::RawRecord;
use crate::filter::FilterSettings;
use crate::release::{NormalizedRecord, ResultSet};

/// States of the search-and-select loop.
///
/// Each state carries what later states need, so nothing is shared or
/// mutated behind the session's back.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Waiting for a non-empty search term.
    AwaitingSearchTerm,
    /// About to query the catalog.
    Searching { term: String },
    /// Asking the filter questions, one per step.
    AwaitingFilterInput {
        term: String,
        rows: Vec<RawRecord>,
        question: FilterQuestion,
        settings: FilterSettings,
    },
    /// Normalizing and filtering the catalog rows.
    Filtering {
        term: String,
        rows: Vec<RawRecord>,
        settings: FilterSettings,
    },
    /// Rendering the table and writing the report.
    Presenting { results: ResultSet },
    /// Waiting for a valid ID from the result set.
    AwaitingSelection { results: ResultSet },
    /// Terminal.
    Done(SessionOutcome),
    /// Terminal after a fatal error. Holds the error's message.
    Failed { reason: String },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::AwaitingSearchTerm => "awaiting_search_term",
            SessionState::Searching { .. } => "searching",
            SessionState::AwaitingFilterInput { .. } => "awaiting_filter_input",
            SessionState::Filtering { .. } => "filtering",
            SessionState::Presenting { .. } => "presenting",
            SessionState::AwaitingSelection { .. } => "awaiting_selection",
            SessionState::Done(_) => "done",
            SessionState::Failed { .. } => "failed",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SessionState::Done(_))
    }

    /// Done or failed. No further input is read from a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Done(_) | SessionState::Failed { .. })
    }
}

/// The yes/no filter questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterQuestion {
    OnlyUltraHd,
    Allow720p,
    Allow480p,
    AllowLegacyCodec,
}

impl FilterQuestion {
    pub fn prompt(&self) -> &'static str {
        match self {
            FilterQuestion::OnlyUltraHd => "Show only 4K releases? [y/N] ",
            FilterQuestion::Allow720p => "Include 720p releases? [y/N] ",
            FilterQuestion::Allow480p => "Include 480p releases? [y/N] ",
            FilterQuestion::AllowLegacyCodec => "Include XviD releases? [y/N] ",
        }
    }

    /// Record `answer` and return the next question, if any.
    ///
    /// A yes to the 4K question ends the sequence.
    pub fn answer(&self, settings: &mut FilterSettings, answer: bool) -> Option<FilterQuestion> {
        match self {
            FilterQuestion::OnlyUltraHd => {
                settings.only_ultra_hd = answer;
                if answer {
                    None
                } else {
                    Some(FilterQuestion::Allow720p)
                }
            }
            FilterQuestion::Allow720p => {
                settings.allow_720p = answer;
                Some(FilterQuestion::Allow480p)
            }
            FilterQuestion::Allow480p => {
                settings.allow_480p = answer;
                Some(FilterQuestion::AllowLegacyCodec)
            }
            FilterQuestion::AllowLegacyCodec => {
                settings.allow_legacy_codec = answer;
                None
            }
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Nothing survived the filters.
    NoResults { term: String },
    /// The user picked a record.
    Selected {
        record: NormalizedRecord,
        link: String,
        /// Whether the link made it onto the clipboard.
        copied: bool,
    },
}
