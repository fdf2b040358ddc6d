//! Core types for entrybox.
//!
//! Small value types shared by the component, its style configuration,
//! and the terminal surface adapter.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Dimmed gray, the conventional placeholder tint.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Font Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Font attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `FontStyle::BOLD | FontStyle::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontStyle: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

// =============================================================================
// Row Association
// =============================================================================

/// Opaque identifier linking an entry to the data row it edits.
///
/// A list owner attaches this so it can correlate the entry back to its
/// row when a callback fires. It is a plain value, never a reference into
/// the owner's data - the entry stores it for lookup only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub section: u32,
    pub row: u32,
}

impl RowId {
    /// Create a new row identifier.
    pub const fn new(section: u32, row: u32) -> Self {
        Self { section, row }
    }
}
