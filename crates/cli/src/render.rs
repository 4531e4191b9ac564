use std::fs;
use std::io;
use std::path::PathBuf;

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;

use rarsift_core::{ResultSink, TableRow};

/// One terminal table line. Headers match [`rarsift_core::TABLE_HEADERS`].
#[derive(Tabled)]
struct ReleaseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Size (GiB)")]
    size: String,
}

impl From<&TableRow> for ReleaseRow {
    fn from(row: &TableRow) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            category: row.category.clone(),
            size: format!("{:.2}", row.size_gib),
        }
    }
}

fn render(rows: &[TableRow]) -> String {
    let table_rows: Vec<ReleaseRow> = rows.iter().map(ReleaseRow::from).collect();
    Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Prints tables to stdout and writes the report file.
pub struct TerminalSink {
    report_path: PathBuf,
}

impl TerminalSink {
    pub fn new(report_path: PathBuf) -> Self {
        Self { report_path }
    }
}

impl ResultSink for TerminalSink {
    fn render_table(&self, rows: &[TableRow]) {
        println!("{}", render(rows));
    }

    fn write_report(&self, report: &str) -> io::Result<()> {
        // Overwrites the previous run's report
        fs::write(&self.report_path, report)?;
        debug!(path = ?self.report_path, bytes = report.len(), "Report written");
        Ok(())
    }
}
