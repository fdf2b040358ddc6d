//! Placeholder Style - Appearance of the placeholder overlay.
//!
//! Set-and-forget configuration read by the rendering surface when it
//! redraws the placeholder. None of these values participate in state
//! transitions.

use crate::types::{FontStyle, Rgba};

/// Visual configuration for the placeholder overlay.
///
/// Values take effect on the next placeholder redraw performed by the
/// surface. Opacity is clamped into [0.0, 1.0] on write, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderStyle {
    /// Placeholder text color.
    pub color: Rgba,
    /// Placeholder font attributes.
    pub font: FontStyle,
    /// Placeholder opacity, 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            color: Rgba::GRAY,
            font: FontStyle::DIM,
            opacity: 1.0,
        }
    }
}

impl PlaceholderStyle {
    /// Set the placeholder color.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Set the placeholder font attributes.
    pub fn set_font(&mut self, font: FontStyle) {
        self.font = font;
    }

    /// Set the placeholder opacity, clamping into [0.0, 1.0].
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}
