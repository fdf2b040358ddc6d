//! # entrybox
//!
//! Placeholder text-entry component behavior for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The crate implements the decision-making core of a text-entry widget and
//! nothing else. A [`TextEntry`] wraps an underlying text-rendering surface
//! (the thing that owns glyphs, cursor, and selection) and intercepts its
//! notifications:
//!
//! ```text
//! surface notification → constraint (clamp) → events (dispatch) → state
//!                                                       ↓
//!                            surface ← placeholder visibility + height
//! ```
//!
//! - Placeholder is visible exactly when the text is empty, focus or not.
//! - Text is clamped to a max grapheme count; a clamping change fires the
//!   `LengthExceeded` slot exactly once.
//! - Focus transitions fire `BeginEdit`/`EndEdit` once per actual change.
//! - Content height is recomputed per change and pushed to the surface so
//!   a containing layout can resize.
//!
//! ## Modules
//!
//! - [`entry`] - The component: state, transitions, configuration
//! - [`constraint`] - Grapheme-based max-length enforcement
//! - [`events`] - Single-slot callback registry and dispatch
//! - [`style`] - Placeholder color, font attributes, opacity
//! - [`measure`] - Content height measurement (terminal-cell default)
//! - [`surface`] - The surface trait and the crossterm terminal adapter
//! - [`types`] - Shared value types (color, font flags, row association)

pub mod constraint;
pub mod entry;
pub mod events;
pub mod measure;
pub mod style;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use entry::{EntryState, TextEntry};

pub use constraint::{enforce, grapheme_count};

pub use events::{EntryCallback, EventSlot, EventSlots};

pub use style::PlaceholderStyle;

pub use measure::{line_count_measure, measure_text_height, string_width, HeightMeasure};

pub use surface::{
    convert_event, convert_key_event, disable_focus_change, enable_focus_change, poll_event,
    read_event, EntryEvent, NullSurface, Surface, TerminalSurface,
};
