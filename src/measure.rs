//! Text Measurement - Content height for layout owners.
//!
//! The entry reports a height so a containing layout (a list row, a form)
//! can resize around the content. Height measurement itself is an external
//! concern: the owner supplies a `HeightMeasure` function, and this module
//! provides a terminal-cell default based on wrapped line count.
//!
//! Widths come from `unicode-width` (fullwidth CJK is 2 cells, control
//! characters are 0).

use std::rc::Rc;

use unicode_width::UnicodeWidthChar;

// =============================================================================
// Height Measure Function
// =============================================================================

/// Caller-supplied height measurement: current text in, layout height out.
pub type HeightMeasure = Rc<dyn Fn(&str) -> f32>;

/// Default measure: wrapped line count at `wrap_width` cells.
///
/// Returns at least 1.0 so an empty entry still claims one line for the
/// placeholder overlay.
pub fn line_count_measure(wrap_width: u16) -> HeightMeasure {
    Rc::new(move |text| measure_text_height(text, wrap_width).max(1) as f32)
}

// =============================================================================
// Cell Measurement
// =============================================================================

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .map(|c| c.width().unwrap_or(0) as u16)
        .fold(0u16, u16::saturating_add)
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines the text would occupy: 0 for empty text,
/// otherwise at least 1. Wrapping is per character; an explicit newline
/// always starts a new line.
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }

    if available_width == 0 {
        return 1; // Degenerate case
    }

    let mut lines = 0u16;
    let mut current_line_width = 0u16;

    for c in text.chars() {
        if c == '\n' {
            lines = lines.saturating_add(1);
            current_line_width = 0;
            continue;
        }

        let char_width = c.width().unwrap_or(0) as u16;

        if current_line_width + char_width > available_width && current_line_width > 0 {
            // Wrap to next line
            lines = lines.saturating_add(1);
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }
    }

    // Count the final line if it has content
    if current_line_width > 0 || lines == 0 {
        lines = lines.saturating_add(1);
    }

    lines.max(1)
}
