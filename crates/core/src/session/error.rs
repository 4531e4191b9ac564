//! Error types for the search session.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Fatal session errors. Anything recoverable is handled inside the loop.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog could not be queried.
    #[error("Catalog search failed: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading user input failed.
    #[error("Failed to read input")]
    Input(#[source] std::io::Error),

    /// The input stream closed before the session finished.
    #[error("Input closed before the session finished")]
    InputClosed,

    /// A step was attempted after an earlier fatal error.
    #[error("Session already failed: {0}")]
    Aborted(String),
}

/// A selection the user can correct by entering another ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a valid ID, enter a number from the ID column")]
    NotANumber(String),

    #[error("No result with ID {0}, pick one from the table")]
    NotFound(i64),
}

/// Clipboard hand-off failures. Never fatal: the link stays on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard copy failed: {0}")]
    Failed(String),
}
