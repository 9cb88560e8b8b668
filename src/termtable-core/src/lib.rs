//! Width-constrained box-drawing table rendering.
//!
//! Renders arrays of records into a bordered table that never exceeds a
//! maximum display width:
//! - Full box-drawing borders
//! - Proportional column shrinking and growing under a width budget
//! - Hard character wrapping of over-long cells across multiple lines
//! - Horizontal and vertical cell alignment
//! - Optional `(index)` column
//!
//! ## Example Output
//!
//! ```text
//! ┌──────┬─────┐
//! │ name │ age │
//! ├──────┼─────┤
//! │ John │ 30  │
//! │ Jane │ 25  │
//! └──────┴─────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use serde_json::json;
//! use termtable_core::{TableOptions, create_table};
//!
//! let items = vec![
//!     json!({"name": "John", "age": 30}),
//!     json!({"name": "Jane", "age": 25}),
//! ];
//!
//! let table = create_table(&items, &["name", "age"], &TableOptions::default())?;
//! assert!(table.lines().all(|line| line.chars().count() <= 80));
//! # Ok::<(), termtable_core::TableError>(())
//! ```
//!
//! Width measurement is by `char` count: one character, one column. Wide
//! CJK glyphs, zero-width combining marks, and ANSI escape sequences in
//! cell content will skew the layout.

pub mod border;
mod builder;
mod error;
mod render;
mod stringify;
#[cfg(test)]
mod tests;
mod types;
pub mod utils;
mod width;
mod wrap;

pub use builder::TableBuilder;
pub use error::{TableError, TableResult};
pub use stringify::{Stringify, default_stringify};
pub use types::{ColumnSizing, HorizontalAlignment, Table, TableOptions, VerticalAlignment};
pub use width::{minimum_table_width, resolve_widths};
pub use wrap::{pad_vertical, wrap_cell};

use serde::Serialize;
use tracing::debug;

/// Renders `items` as a bordered table with one column per key.
///
/// Each item is converted through [`serde_json::to_value`]; field lookups
/// on the resulting records yield JSON null for missing keys, rendered per
/// [`TableOptions::stringify`].
///
/// Returns the table text, or, when `max_width` is infeasible and
/// `error_if_too_small` is disabled, the explanation as plain text.
pub fn create_table<R, K>(items: &[R], keys: &[K], options: &TableOptions) -> TableResult<String>
where
    R: Serialize,
    K: AsRef<str>,
{
    let mut records = Vec::with_capacity(items.len());
    for (row, item) in items.iter().enumerate() {
        let record =
            serde_json::to_value(item).map_err(|source| TableError::serialize(row, source))?;
        records.push(record);
    }

    debug!(rows = records.len(), columns = keys.len(), "creating table");

    Table::from_records(&records, keys, options).render(options)
}
