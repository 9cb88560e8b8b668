//! Table builder for incremental table construction.
//!
//! Useful when cells arrive piece by piece and are already strings; the
//! built [`Table`] goes through the same layout pipeline as
//! [`create_table`](crate::create_table) via [`Table::render`].

use crate::types::Table;

/// Builder for constructing tables incrementally.
#[derive(Debug, Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    in_header: bool,
}

impl TableBuilder {
    /// Creates a new empty table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building the header row.
    ///
    /// Cells added after this call become column names.
    pub fn start_header(&mut self) {
        self.in_header = true;
        self.current_row.clear();
    }

    /// Ends the header row.
    ///
    /// The accumulated cells become the table headers.
    pub fn end_header(&mut self) {
        if self.in_header {
            self.headers = std::mem::take(&mut self.current_row);
            self.in_header = false;
        }
    }

    /// Starts a new data row.
    pub fn start_row(&mut self) {
        self.current_row.clear();
    }

    /// Ends the current data row.
    ///
    /// The accumulated cells are added as a new row; an empty row is
    /// dropped.
    pub fn end_row(&mut self) {
        if !self.in_header && !self.current_row.is_empty() {
            self.rows.push(std::mem::take(&mut self.current_row));
        }
    }

    /// Adds a cell to the current row (header or data).
    pub fn add_cell(&mut self, content: impl Into<String>) {
        self.current_row.push(content.into());
    }

    /// Builds the final table.
    pub fn build(self) -> Table {
        Table::new(self.headers, self.rows)
    }
}
