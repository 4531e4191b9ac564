//! Recording result sink for testing.

use std::io;
use std::sync::{Arc, Mutex};

use crate::presenter::TableRow;
use crate::session::ResultSink;

/// Result sink that keeps every table and report instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    tables: Arc<Mutex<Vec<Vec<TableRow>>>>,
    reports: Arc<Mutex<Vec<String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables rendered so far.
    pub fn tables(&self) -> Vec<Vec<TableRow>> {
        self.tables.lock().unwrap().clone()
    }

    /// Reports written so far.
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    /// Make report writes fail with a permission error.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }
}

impl ResultSink for RecordingSink {
    fn render_table(&self, rows: &[TableRow]) {
        self.tables.lock().unwrap().push(rows.to_vec());
    }

    fn write_report(&self, report: &str) -> io::Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock report write failure",
            ));
        }
        self.reports.lock().unwrap().push(report.to_string());
        Ok(())
    }
}
