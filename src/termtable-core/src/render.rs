//! Row and border rendering.
//!
//! Consumes solved column widths and emits the final bordered text block.

use tracing::trace;

use crate::border;
use crate::types::{CELL_PADDING, TableOptions};
use crate::utils::align_cell_line;
use crate::wrap::{pad_vertical, wrap_cell};

/// Renders header and data cells into the bordered table string.
///
/// `widths` are final column widths, padding included; the caller has
/// already validated them against the budget.
pub(crate) fn render_rows(
    headers: &[String],
    rows: &[Vec<String>],
    widths: &[usize],
    options: &TableOptions,
) -> String {
    let mut lines = Vec::new();

    // Top border: ┌──────┬──────┐
    lines.push(rule(
        widths,
        border::TOP_LEFT,
        border::T_DOWN,
        border::TOP_RIGHT,
    ));

    if !headers.is_empty() {
        render_row(&mut lines, headers, widths, options);

        // Header divider: ├──────┼──────┤
        lines.push(rule(widths, border::T_RIGHT, border::CROSS, border::T_LEFT));
    }

    for row in rows {
        render_row(&mut lines, row, widths, options);
    }

    // Bottom border: └──────┴──────┘
    lines.push(rule(
        widths,
        border::BOTTOM_LEFT,
        border::T_UP,
        border::BOTTOM_RIGHT,
    ));

    trace!(lines = lines.len(), "rendered table block");

    lines.join("\n")
}

/// Renders one row block: wraps every cell to its inner width, pads short
/// cells to the row height, then emits one physical line per height slot.
fn render_row(lines: &mut Vec<String>, cells: &[String], widths: &[usize], options: &TableOptions) {
    let mut wrapped: Vec<Vec<String>> = Vec::with_capacity(widths.len());
    for (i, &width) in widths.iter().enumerate() {
        let content = cells.get(i).map(String::as_str).unwrap_or("");
        wrapped.push(wrap_cell(content, width - 2 * CELL_PADDING));
    }

    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    for cell in &mut wrapped {
        pad_vertical(cell, height, options.vertical_alignment);
    }

    for line_index in 0..height {
        let mut line = String::new();
        line.push(border::VERTICAL);
        for (cell, &width) in wrapped.iter().zip(widths) {
            let content = cell.get(line_index).map(String::as_str).unwrap_or("");
            line.push_str(&align_cell_line(
                content,
                width,
                options.horizontal_alignment,
            ));
            line.push(border::VERTICAL);
        }
        lines.push(line);
    }
}

/// Builds a horizontal rule: per-column runs of `─` joined with `mid` and
/// wrapped in `left`/`right`.
fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();

    line.push(left);
    for (i, &width) in widths.iter().enumerate() {
        line.extend(std::iter::repeat(border::HORIZONTAL).take(width));
        if i < widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);

    line
}
