//! Terminal Surface - crossterm adapter for the entry component.
//!
//! Bridges crossterm's event system with the entry's notification contract:
//!
//! - `convert_key_event` / `convert_event` - crossterm events to [`EntryEvent`]
//! - `poll_event` / `read_event` - non-blocking and blocking reads
//! - [`TerminalSurface`] - raw text storage plus the [`Surface`] impl that
//!   draws the placeholder overlay
//! - `enable_focus_change` / `disable_focus_change` - terminal focus reporting
//!
//! The surface owns the raw buffer and the editing rules (character insert,
//! grapheme-wise backspace, newline when multiline); the entry owns the
//! behavior. After every edit the raw buffer is forwarded through
//! `text_changed` and then re-synced from the entry, so a clamped change
//! rewrites the storage the same way it rewrites the state.
//!
//! # Example
//!
//! ```ignore
//! use entrybox::{TextEntry, TerminalSurface, poll_event};
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let entry = Rc::new(TextEntry::new());
//! let surface = Rc::new(TerminalSurface::new());
//! entry.attach_surface(surface.clone());
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         surface.apply(&event, &entry);
//!     }
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{RestorePosition, SavePosition};
use crossterm::event::{
    poll, read, DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::style::{Attribute, Attributes, Color, Print, SetAttribute, SetAttributes, SetForegroundColor};
use crossterm::{execute, queue};
use unicode_segmentation::UnicodeSegmentation;

use crate::entry::TextEntry;
use crate::style::PlaceholderStyle;
use crate::types::{FontStyle, Rgba};

use super::Surface;

// =============================================================================
// ENTRY EVENT ENUM
// =============================================================================

/// Terminal events, reduced to what the entry's surface cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    /// Printable character typed.
    Insert(char),
    /// Backspace pressed - remove the last user-perceived character.
    Backspace,
    /// Alt+Enter - insert a newline (multiline surfaces only).
    Newline,
    /// Enter pressed - the owner decides what submit means.
    Submit,
    /// Escape pressed.
    Cancel,
    /// Terminal gained focus.
    FocusGained,
    /// Terminal lost focus.
    FocusLost,
    /// Terminal resize (new width, height).
    Resize(u16, u16),
    /// No event or unhandled event type.
    None,
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm event to an [`EntryEvent`].
pub fn convert_event(event: CrosstermEvent) -> EntryEvent {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::FocusGained => EntryEvent::FocusGained,
        CrosstermEvent::FocusLost => EntryEvent::FocusLost,
        CrosstermEvent::Resize(w, h) => EntryEvent::Resize(w, h),
        _ => EntryEvent::None,
    }
}

/// Convert a crossterm key event to an [`EntryEvent`].
///
/// Key releases and control-chorded characters are ignored.
pub fn convert_key_event(event: CrosstermKeyEvent) -> EntryEvent {
    if event.kind == KeyEventKind::Release {
        return EntryEvent::None;
    }

    match event.code {
        KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
            EntryEvent::Insert(c)
        }
        KeyCode::Backspace => EntryEvent::Backspace,
        KeyCode::Enter if event.modifiers.contains(KeyModifiers::ALT) => EntryEvent::Newline,
        KeyCode::Enter => EntryEvent::Submit,
        KeyCode::Esc => EntryEvent::Cancel,
        _ => EntryEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<EntryEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<EntryEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// FOCUS REPORTING
// =============================================================================

/// Enable terminal focus-change reporting.
pub fn enable_focus_change() -> std::io::Result<()> {
    execute!(stdout(), EnableFocusChange)
}

/// Disable terminal focus-change reporting.
pub fn disable_focus_change() -> std::io::Result<()> {
    execute!(stdout(), DisableFocusChange)
}

// =============================================================================
// TERMINAL SURFACE
// =============================================================================

/// The bundled terminal text surface.
///
/// Owns the raw text storage and applies edit events to it; the entry it
/// forwards to owns every behavioral decision. Single-line by default;
/// [`multiline`](Self::multiline) surfaces accept `Newline` events.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    buffer: RefCell<String>,
    multiline: bool,
    last_height: Cell<f32>,
}

impl TerminalSurface {
    /// Create a single-line surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface that accepts newlines.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Current raw storage (kept in sync with the entry's clamped text).
    pub fn content(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Height most recently applied by the entry.
    pub fn last_height(&self) -> f32 {
        self.last_height.get()
    }

    /// Apply one event: mutate the raw buffer where editing is this
    /// surface's concern, and forward the resulting notification.
    pub fn apply(&self, event: &EntryEvent, entry: &TextEntry) {
        match event {
            EntryEvent::Insert(c) => {
                self.buffer.borrow_mut().push(*c);
                self.forward_text(entry);
            }
            EntryEvent::Backspace => {
                {
                    let mut buffer = self.buffer.borrow_mut();
                    if let Some((cut, _)) = buffer.grapheme_indices(true).last() {
                        buffer.truncate(cut);
                    }
                }
                self.forward_text(entry);
            }
            EntryEvent::Newline if self.multiline => {
                self.buffer.borrow_mut().push('\n');
                self.forward_text(entry);
            }
            EntryEvent::FocusGained => entry.focus_gained(),
            EntryEvent::FocusLost => entry.focus_lost(),
            _ => {}
        }
    }

    /// Forward the raw buffer as a text-change notification, then re-sync
    /// the storage with whatever the entry kept (it may have clamped).
    fn forward_text(&self, entry: &TextEntry) {
        let raw = self.buffer.borrow().clone();
        entry.text_changed(&raw);

        let kept = entry.text();
        if kept != raw {
            *self.buffer.borrow_mut() = kept;
        }
    }

    fn draw_placeholder(&self, hint: &str, style: &PlaceholderStyle) -> std::io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            SavePosition,
            SetForegroundColor(convert_color(style.color, style.opacity)),
            SetAttributes(convert_font(style.font)),
            Print(hint),
            SetAttribute(Attribute::Reset),
            RestorePosition,
        )?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn placeholder_changed(&self, hint: Option<&str>, style: &PlaceholderStyle) {
        // Hiding needs no work: the owner's redraw of real content
        // overwrites the overlay. Overlay output is best-effort; a failed
        // write only loses the hint.
        if let Some(hint) = hint {
            if style.opacity > 0.0 {
                let _ = self.draw_placeholder(hint, style);
            }
        }
    }

    fn height_changed(&self, height: f32) {
        self.last_height.set(height);
    }
}

// =============================================================================
// STYLE CONVERSION
// =============================================================================

/// Convert an [`Rgba`] to a crossterm color.
///
/// Terminals have no alpha channel; opacity is approximated by scaling the
/// channels toward the (dark) background.
pub fn convert_color(color: Rgba, opacity: f32) -> Color {
    if color.is_terminal_default() {
        return Color::Reset;
    }
    let scale = |channel: i16| (channel as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color::Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Convert a [`FontStyle`] bitfield to crossterm attributes.
pub fn convert_font(font: FontStyle) -> Attributes {
    let mut attrs = Attributes::default();
    if font.contains(FontStyle::BOLD) {
        attrs = attrs.with(Attribute::Bold);
    }
    if font.contains(FontStyle::DIM) {
        attrs = attrs.with(Attribute::Dim);
    }
    if font.contains(FontStyle::ITALIC) {
        attrs = attrs.with(Attribute::Italic);
    }
    if font.contains(FontStyle::UNDERLINE) {
        attrs = attrs.with(Attribute::Underlined);
    }
    if font.contains(FontStyle::STRIKETHROUGH) {
        attrs = attrs.with(Attribute::CrossedOut);
    }
    attrs
}

// =============================================================================
// TESTS
// =============================================================================
