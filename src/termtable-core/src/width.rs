//! Column width resolution.
//!
//! Turns natural (unwrapped) column widths into final widths that fit the
//! width budget, shrinking or growing proportionally. Multiplicative
//! distribution preserves relative column proportions, so a column with very
//! long content does not collapse to the same size as a short one merely
//! because both exceed the average.

use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::types::{CELL_PADDING, ColumnSizing, MIN_COLUMN_WIDTH};
use crate::utils::display_width;

/// Smallest feasible `max_width` for a table with `column_count` columns:
/// one border glyph per column boundary plus the minimum column width per
/// cell.
pub fn minimum_table_width(column_count: usize) -> usize {
    column_count * (MIN_COLUMN_WIDTH + 1) + 1
}

/// Natural width of each column: its longest cell (header included) plus
/// one space of padding per side, never below the minimum column width.
pub(crate) fn natural_widths(
    headers: &[String],
    rows: &[Vec<String>],
    column_count: usize,
) -> Vec<usize> {
    let mut widths = vec![MIN_COLUMN_WIDTH; column_count];

    for (i, name) in headers.iter().enumerate() {
        if i < column_count {
            widths[i] = widths[i].max(display_width(name) + 2 * CELL_PADDING);
        }
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < column_count {
                widths[i] = widths[i].max(display_width(cell) + 2 * CELL_PADDING);
            }
        }
    }

    widths
}

/// Resolves final column widths for the given budget.
///
/// `budget` is `max_width - column_count - 1`: the character columns left
/// for cells once every border glyph is accounted for. The caller is
/// expected to have checked `max_width` against [`minimum_table_width`];
/// narrower budgets fail the final width check with
/// [`TableError::LayoutInvariant`].
///
/// With `full_width`, columns grow until the budget is filled exactly.
pub fn resolve_widths(
    natural_widths: &[usize],
    budget: usize,
    sizing: ColumnSizing,
    full_width: bool,
) -> TableResult<Vec<usize>> {
    let column_count = natural_widths.len();
    if column_count == 0 {
        return Ok(Vec::new());
    }

    let mut widths: Vec<i64> = match sizing {
        ColumnSizing::Stretch => natural_widths
            .iter()
            .map(|&w| w.max(MIN_COLUMN_WIDTH) as i64)
            .collect(),
        ColumnSizing::Even => {
            let widest = natural_widths
                .iter()
                .copied()
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
                .max(MIN_COLUMN_WIDTH);
            vec![widest as i64; column_count]
        }
    };

    let budget = budget as i64;
    let total: i64 = widths.iter().sum();
    let average = budget / column_count as i64;

    if total > budget {
        shrink(&mut widths, total - budget, average);
    } else if full_width && total < budget {
        grow(&mut widths, budget - total, average);
    }

    // The shrink tie-break hands the rounding remainder to the last wide
    // column by direct subtraction; never emit a layout where that pushed a
    // column below the floor.
    for (column, &width) in widths.iter().enumerate() {
        if width < MIN_COLUMN_WIDTH as i64 {
            return Err(TableError::layout_invariant(column, width));
        }
    }

    debug!(?widths, budget, "resolved column widths");

    Ok(widths.iter().map(|&w| w as usize).collect())
}

/// Removes `overflow` columns of width, taking proportionally from every
/// column wider than `average`. All but the last such column floor their
/// scaled width (clamped to `average`); the last absorbs whatever overflow
/// remains.
fn shrink(widths: &mut [i64], overflow: i64, average: i64) {
    let wide: Vec<usize> = (0..widths.len()).filter(|&i| widths[i] > average).collect();
    let Some((&last, rest)) = wide.split_last() else {
        return;
    };

    let wide_total: i64 = wide.iter().map(|&i| widths[i]).sum();
    let excess = wide_total - wide.len() as i64 * average;
    let shrink_factor = 1.0 - overflow as f64 / excess as f64;

    let mut remaining = overflow;
    for &i in rest {
        let scaled = (widths[i] as f64 * shrink_factor).floor() as i64;
        let new_width = scaled.max(average);
        remaining -= widths[i] - new_width;
        widths[i] = new_width;
    }
    widths[last] -= remaining;
}

/// Distributes `growth` extra columns of width, giving proportionally to
/// every column narrower than `average`. All but the last such column floor
/// their scaled width; the last takes the exact remainder. When no column
/// sits below the average (rounding slack can leave the table a few cells
/// short), the whole remainder goes to the last column of the table.
fn grow(widths: &mut [i64], growth: i64, average: i64) {
    let narrow: Vec<usize> = (0..widths.len()).filter(|&i| widths[i] < average).collect();
    let Some((&last, rest)) = narrow.split_last() else {
        if let Some(width) = widths.last_mut() {
            *width += growth;
        }
        return;
    };

    let narrow_total: i64 = narrow.iter().map(|&i| widths[i]).sum();
    let grow_factor = 1.0 + growth as f64 / narrow_total as f64;

    let mut remaining = growth;
    for &i in rest {
        let scaled = (widths[i] as f64 * grow_factor).floor() as i64;
        remaining -= scaled - widths[i];
        widths[i] = scaled;
    }
    widths[last] += remaining;
}
