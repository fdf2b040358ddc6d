//! Length Constraint - Max-length enforcement for entry text.
//!
//! Clamps candidate text to a maximum number of user-perceived characters
//! (grapheme clusters), so a multi-codepoint character is never split.
//!
//! A maximum of 0 means unlimited, matching the convention for input
//! max-length throughout the crate.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Clamp `candidate` to at most `max_length` grapheme clusters.
///
/// Returns the final text and whether clamping happened.
///
/// - `max_length == 0` - unlimited, candidate passes through unchanged.
/// - Over the limit - the first `max_length` graphemes are kept
///   (deterministic prefix truncation, trailing content is dropped).
/// - At or under the limit - candidate passes through unchanged.
pub fn enforce(candidate: &str, max_length: usize) -> (Cow<'_, str>, bool) {
    if max_length == 0 {
        return (Cow::Borrowed(candidate), false);
    }

    // grapheme_indices yields byte offsets; the offset of grapheme number
    // `max_length` (0-based) is exactly where the prefix ends.
    match candidate.grapheme_indices(true).nth(max_length) {
        Some((cut, _)) => (Cow::Borrowed(&candidate[..cut]), true),
        None => (Cow::Borrowed(candidate), false),
    }
}

/// Count user-perceived characters (grapheme clusters) in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
