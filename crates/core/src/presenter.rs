//! Ranking and presentation of a result set.
//!
//! Produces the rows for the terminal table and the text of the report file.
//! Nothing here touches the terminal or the filesystem; callers hand the
//! output to a [`ResultSink`](crate::session::ResultSink).

use serde::Serialize;

use crate::release::{NormalizedRecord, ResultSet};

/// Extra `-` characters added to each report separator beyond the entry width.
pub const DEFAULT_SEPARATOR_MARGIN: usize = 4;

/// Column headers for the visible table.
pub const TABLE_HEADERS: [&str; 4] = ["ID", "Title", "Category", "Size (GiB)"];

/// One visible table row. Info hash and upload date are left out on purpose;
/// they stay reachable through the result set by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub size_gib: f64,
}

impl From<&NormalizedRecord> for TableRow {
    fn from(record: &NormalizedRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            category: record.category.clone(),
            size_gib: record.size_gib,
        }
    }
}

/// Ranked rows plus the report text for one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub rows: Vec<TableRow>,
    pub report: String,
}

/// Orders records and renders them for display.
#[derive(Debug, Clone)]
pub struct Presenter {
    separator_margin: usize,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR_MARGIN)
    }
}

impl Presenter {
    pub fn new(separator_margin: usize) -> Self {
        Self { separator_margin }
    }

    pub fn present(&self, results: &ResultSet) -> Presentation {
        let ranked = rank(results);

        let mut report = String::new();
        for record in &ranked {
            let line = report_line(record);
            let width = line.chars().count() + self.separator_margin;
            report.push_str(&line);
            report.push('\n');
            report.push_str(&"-".repeat(width));
            report.push('\n');
        }

        Presentation {
            rows: ranked.into_iter().map(TableRow::from).collect(),
            report,
        }
    }
}

/// Largest first; equal sizes keep catalog order.
pub fn rank(results: &ResultSet) -> Vec<&NormalizedRecord> {
    let mut ranked: Vec<&NormalizedRecord> = results.records().iter().collect();
    ranked.sort_by(|a, b| b.size_gib.total_cmp(&a.size_gib));
    ranked
}

fn report_line(record: &NormalizedRecord) -> String {
    format!(
        "{} | {} | {} | {:.2} GiB",
        record.id, record.title, record.category, record.size_gib
    )
}
