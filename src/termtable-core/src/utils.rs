//! Width measurement and horizontal alignment helpers.

use crate::types::HorizontalAlignment;

/// Returns the display width of `text` in character columns.
///
/// One `char` occupies one column. Wide and zero-width glyphs are not
/// special-cased; see the crate docs.
#[inline]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pads one cell line to exactly `width` columns.
///
/// Left alignment keeps a single leading space, right alignment a single
/// trailing space, and middle alignment trims the content before centering
/// it (leftover padding goes to the right).
pub fn align_cell_line(text: &str, width: usize, alignment: HorizontalAlignment) -> String {
    match alignment {
        HorizontalAlignment::Left => {
            let used = display_width(text) + 1;
            format!(" {}{}", text, " ".repeat(width.saturating_sub(used)))
        }
        HorizontalAlignment::Right => {
            let used = display_width(text) + 1;
            format!("{}{} ", " ".repeat(width.saturating_sub(used)), text)
        }
        HorizontalAlignment::Middle => {
            let trimmed = text.trim();
            let padding = width.saturating_sub(display_width(trimmed));
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), trimmed, " ".repeat(right_pad))
        }
    }
}
