//! Interactive search session.
//!
//! Ties the catalog, normalizer, filter engine, presenter and link generator
//! together as an explicit state machine:
//!
//! ```text
//! AwaitingSearchTerm -> Searching -> AwaitingFilterInput -> Filtering
//!     -> Presenting -> AwaitingSelection -> Done
//! ```
//!
//! Empty search terms, bad yes/no answers, non-numeric IDs and unknown IDs all
//! keep the session where it is and ask again. An empty result set ends the
//! session with [`SessionOutcome::NoResults`]. Catalog and input failures
//! are returned as [`SessionError`] and leave the session in
//! [`SessionState::Failed`]. Report and clipboard failures are only
//! announced to the user.

mod error;
mod input;
mod machine;
mod traits;
mod types;

pub use error::{ClipboardError, SelectionError, SessionError};
pub use input::{parse_search_term, parse_selection, parse_yes_no};
pub use machine::{Session, SEARCH_PROMPT, SELECTION_PROMPT};
pub use traits::{Clipboard, Console, ResultSink};
pub use types::{FilterQuestion, SessionOutcome, SessionState};
