//! Cell wrapping and vertical padding.

use crate::types::VerticalAlignment;

/// Splits `text` into lines of at most `inner_width` characters.
///
/// A hard slice in left-to-right order: no hyphenation, no whitespace
/// collapsing. Empty text yields a single empty line so every row renders
/// with height at least 1.
pub fn wrap_cell(text: &str, inner_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    if inner_width == 0 {
        // Zero inner width cannot occur for solved columns; leave the text
        // unwrapped rather than loop.
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        if count == inner_width {
            lines.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    lines.push(current);

    lines
}

/// Pads a wrapped cell up toward the row height by prepending empty lines.
///
/// Top alignment prepends nothing; the renderer reads past the end of a
/// short cell as blank, so trailing padding is never materialized.
pub fn pad_vertical(lines: &mut Vec<String>, height: usize, alignment: VerticalAlignment) {
    let missing = height.saturating_sub(lines.len());
    if missing == 0 {
        return;
    }

    let prepend = match alignment {
        VerticalAlignment::Top => 0,
        VerticalAlignment::Middle => missing / 2,
        VerticalAlignment::Bottom => missing,
    };
    if prepend == 0 {
        return;
    }

    let mut padded = Vec::with_capacity(prepend + lines.len());
    padded.resize(prepend, String::new());
    padded.append(lines);
    *lines = padded;
}
