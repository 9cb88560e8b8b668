//! Error types for table layout and rendering.

/// Result type alias for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while laying out or rendering a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// `max_width` is below the minimum needed for the column count.
    ///
    /// Recoverable: retry with a larger width, or disable
    /// `error_if_too_small` to receive this message as plain text.
    #[error("maximum width {actual} is below the required minimum of {required} for {columns} columns")]
    InfeasibleWidth {
        required: usize,
        actual: usize,
        columns: usize,
    },

    /// An unrecognized column sizing name.
    #[error("unknown column sizing: {0}")]
    UnknownSizing(String),

    /// An unrecognized alignment name.
    #[error("unknown alignment: {0}")]
    UnknownAlignment(String),

    /// The width solver produced a column below the minimum width despite a
    /// feasible `max_width`. Signals a defect in the solver arithmetic, not
    /// bad input.
    #[error("internal layout error: column {column} resolved to width {width}")]
    LayoutInvariant { column: usize, width: i64 },

    /// A record could not be converted to a JSON value.
    #[error("failed to serialize record {row}: {source}")]
    Serialize {
        row: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl TableError {
    /// Creates a new `InfeasibleWidth` error.
    pub(crate) fn infeasible(required: usize, actual: usize, columns: usize) -> Self {
        Self::InfeasibleWidth {
            required,
            actual,
            columns,
        }
    }

    /// Creates a new `LayoutInvariant` error.
    pub(crate) fn layout_invariant(column: usize, width: i64) -> Self {
        Self::LayoutInvariant { column, width }
    }

    /// Creates a new `Serialize` error.
    pub(crate) fn serialize(row: usize, source: serde_json::Error) -> Self {
        Self::Serialize { row, source }
    }
}
