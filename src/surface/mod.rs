//! Surface Module - The seam to the underlying text-rendering primitive.
//!
//! The entry component never draws. It wraps a surface - the thing that
//! actually renders glyphs, owns the cursor, and handles platform input -
//! and forwards two kinds of requests to it:
//!
//! - show or hide the placeholder overlay (with the hint text and style)
//! - apply a new content height to the containing layout
//!
//! Notifications travel the other way as plain method calls on the entry
//! (`text_changed`, `focus_gained`, `focus_lost`); the surface adapter is
//! responsible for producing them. See [`TerminalSurface`] for the bundled
//! crossterm-backed adapter.

mod terminal;

pub use terminal::{
    convert_event, convert_key_event, disable_focus_change, enable_focus_change, poll_event,
    read_event, EntryEvent, TerminalSurface,
};

use crate::style::PlaceholderStyle;

// =============================================================================
// Surface Trait
// =============================================================================

/// Rendering surface an entry forwards its requests to.
///
/// Implementations are fire-and-forget collaborators: they receive
/// requests synchronously during a transition and report nothing back.
pub trait Surface {
    /// Show (`Some(hint)`) or hide (`None`) the placeholder overlay.
    fn placeholder_changed(&self, hint: Option<&str>, style: &PlaceholderStyle);

    /// Apply a new content height to the containing layout.
    fn height_changed(&self, height: f32);
}

/// Surface that ignores every request.
///
/// The default until the owner attaches a real surface; also useful for
/// headless tests of the behavioral core.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn placeholder_changed(&self, _hint: Option<&str>, _style: &PlaceholderStyle) {}

    fn height_changed(&self, _height: f32) {}
}
