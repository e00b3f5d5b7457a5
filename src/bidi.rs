//! Display-order reordering.
//!
//! The shaping core treats bidirectional reordering as an external black
//! box: a fully shaped logical string goes in, the visually ordered string
//! comes out. Level resolution and run reversal are delegated wholesale to
//! the `unicode-bidi` implementation of UAX #9.

use unicode_bidi::BidiInfo;

/// Reorder a logical string into display order.
///
/// Paragraphs (separated by `'\n'`) are reordered independently; each
/// separator stays at its paragraph boundary so break count and positions
/// survive reordering.
#[must_use]
pub fn reorder(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(text, None);
    let mut display = String::with_capacity(text.len());

    for paragraph in &bidi.paragraphs {
        let range = paragraph.range.clone();
        // The paragraph range includes its trailing separator; reorder the
        // content without it so an RTL run cannot carry the break.
        let has_newline = text[range.clone()].ends_with('\n');
        let content = if has_newline {
            range.start..range.end - 1
        } else {
            range
        };
        if !content.is_empty() {
            display.push_str(&bidi.reorder_line(paragraph, content));
        }
        if has_newline {
            display.push('\n');
        }
    }

    display
}
