//! Collaborator traits the session talks to.
//!
//! The session itself performs no terminal, file or clipboard I/O; the
//! binary supplies implementations of these.

use std::io;

use crate::presenter::TableRow;

use super::ClipboardError;

/// Line-oriented user interaction.
pub trait Console {
    /// Show `prompt` and block until a line is entered.
    ///
    /// Returns `Ok(None)` when the input stream is closed.
    fn read_line(&self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a message to the user.
    fn say(&self, message: &str);
}

/// Destination for a presented result set.
pub trait ResultSink {
    /// Print the rows as a table.
    fn render_table(&self, rows: &[TableRow]);

    /// Write (overwrite) the report file.
    fn write_report(&self, report: &str) -> io::Result<()>;
}

/// System clipboard.
pub trait Clipboard {
    /// Make `text` the current clipboard contents.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
