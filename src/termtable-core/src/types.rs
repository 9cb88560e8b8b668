//! Core types for table layout.
//!
//! Contains the sizing/alignment enums, `TableOptions`, and the `Table`
//! struct with its rendering entry point.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{TableError, TableResult};
use crate::render::render_rows;
use crate::stringify::{Stringify, default_stringify};
use crate::width::{minimum_table_width, natural_widths, resolve_widths};

/// Minimum final column width, padding included.
pub(crate) const MIN_COLUMN_WIDTH: usize = 3;

/// Padding on each side of cell content.
pub(crate) const CELL_PADDING: usize = 1;

/// Header label of the optional index column.
pub(crate) const INDEX_HEADER: &str = "(index)";

// ============================================================
// SIZING & ALIGNMENT ENUMS
// ============================================================

/// Column sizing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSizing {
    /// Columns keep their natural widths, shrinking proportionally only
    /// when the table overflows the width budget (default).
    #[default]
    Stretch,
    /// Every column takes the width of the widest one, then shrinks as
    /// Stretch does on overflow.
    Even,
}

impl fmt::Display for ColumnSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stretch => "stretch",
            Self::Even => "even",
        })
    }
}

impl FromStr for ColumnSizing {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "even" => Ok(Self::Even),
            _ => Err(TableError::UnknownSizing(s.to_string())),
        }
    }
}

/// Horizontal alignment of cell content within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// One leading space, content flush left.
    Left,
    /// Content trimmed and centered (default).
    #[default]
    Middle,
    /// One trailing space, content flush right.
    Right,
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        })
    }
}

impl FromStr for HorizontalAlignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "middle" => Ok(Self::Middle),
            "right" => Ok(Self::Right),
            _ => Err(TableError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Vertical alignment of a short cell within its row block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Content at the top, blanks below.
    Top,
    /// Content centered, rounding the extra blank line downward (default).
    #[default]
    Middle,
    /// Content at the bottom, blanks above.
    Bottom,
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        })
    }
}

impl FromStr for VerticalAlignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(TableError::UnknownAlignment(s.to_string())),
        }
    }
}

// ============================================================
// TABLE OPTIONS
// ============================================================

/// Rendering options for [`create_table`](crate::create_table) and
/// [`Table::render`].
#[derive(Clone)]
pub struct TableOptions {
    /// Hard upper bound on the width of every emitted line.
    pub max_width: usize,
    /// Column sizing strategy.
    pub column_sizing: ColumnSizing,
    /// Horizontal alignment applied to every cell line.
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical alignment applied within each row block.
    pub vertical_alignment: VerticalAlignment,
    /// Grow columns until the table fills `max_width` exactly.
    pub full_width: bool,
    /// On an infeasible `max_width`, fail with
    /// [`TableError::InfeasibleWidth`] instead of returning the explanation
    /// as plain text.
    pub error_if_too_small: bool,
    /// Prepend an `(index)` column carrying zero-based row indices.
    pub index_column: bool,
    /// Per-cell value-to-text conversion.
    pub stringify: Stringify,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_width: 80,
            column_sizing: ColumnSizing::default(),
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            full_width: false,
            error_if_too_small: true,
            index_column: false,
            stringify: Arc::new(default_stringify),
        }
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("max_width", &self.max_width)
            .field("column_sizing", &self.column_sizing)
            .field("horizontal_alignment", &self.horizontal_alignment)
            .field("vertical_alignment", &self.vertical_alignment)
            .field("full_width", &self.full_width)
            .field("error_if_too_small", &self.error_if_too_small)
            .field("index_column", &self.index_column)
            .finish_non_exhaustive()
    }
}

impl TableOptions {
    /// Set the maximum table width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the column sizing strategy.
    pub fn with_column_sizing(mut self, sizing: ColumnSizing) -> Self {
        self.column_sizing = sizing;
        self
    }

    /// Set the horizontal alignment.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment.
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Set whether columns grow to fill the full width.
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set the infeasible-width failure behavior.
    pub fn with_error_if_too_small(mut self, error_if_too_small: bool) -> Self {
        self.error_if_too_small = error_if_too_small;
        self
    }

    /// Set whether an `(index)` column is prepended.
    pub fn with_index_column(mut self, index_column: bool) -> Self {
        self.index_column = index_column;
        self
    }

    /// Set the per-cell stringifier.
    pub fn with_stringify(mut self, stringify: Stringify) -> Self {
        self.stringify = stringify;
        self
    }
}

// ============================================================
// TABLE
// ============================================================

/// A stringified table: one header row plus data rows.
///
/// Cells are plain text; all layout (width solving, wrapping, alignment)
/// happens in [`Table::render`]. Nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column name cells.
    pub headers: Vec<String>,
    /// Data rows; each row holds one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from pre-stringified headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from JSON records: one row per record, one column per
    /// key.
    ///
    /// Missing keys, and key lookups into non-object records, read as JSON
    /// null, which the default stringifier renders empty.
    pub fn from_records<K: AsRef<str>>(
        records: &[Value],
        keys: &[K],
        options: &TableOptions,
    ) -> Self {
        let stringify = options.stringify.as_ref();
        let headers: Vec<String> = keys.iter().map(|key| key.as_ref().to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                keys.iter()
                    .map(|key| stringify(record.get(key.as_ref()).unwrap_or(&Value::Null)))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Returns true if the table has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Returns the number of columns, the widest row included.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0))
    }

    /// Renders the table under `options`.
    ///
    /// Returns the bordered multi-line table text without a trailing
    /// newline, or, when `max_width` is infeasible and `error_if_too_small`
    /// is disabled, the explanation as plain text.
    pub fn render(&self, options: &TableOptions) -> TableResult<String> {
        if !options.index_column {
            return layout(&self.headers, &self.rows, options);
        }

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push(INDEX_HEADER.to_string());
        headers.extend_from_slice(&self.headers);

        let mut rows = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len() + 1);
            cells.push(index.to_string());
            cells.extend_from_slice(row);
            rows.push(cells);
        }

        layout(&headers, &rows, options)
    }
}

/// Feasibility check, width solving, and rendering for final header/row
/// cells.
fn layout(headers: &[String], rows: &[Vec<String>], options: &TableOptions) -> TableResult<String> {
    let column_count = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    if column_count == 0 {
        return Ok(String::new());
    }

    let required = minimum_table_width(column_count);
    if options.max_width < required {
        let error = TableError::infeasible(required, options.max_width, column_count);
        if options.error_if_too_small {
            return Err(error);
        }
        return Ok(error.to_string());
    }

    let naturals = natural_widths(headers, rows, column_count);
    let budget = options.max_width - column_count - 1;
    let widths = resolve_widths(&naturals, budget, options.column_sizing, options.full_width)?;

    Ok(render_rows(headers, rows, &widths, options))
}
