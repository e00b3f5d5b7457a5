//! Per-line shaping pipeline.
//!
//! Joining never crosses a line boundary: the input is split on `'\n'`, each
//! line is shaped independently with null context at both ends, and the
//! output is rejoined with the breaks exactly where they were. An input with
//! `k` breaks produces output with `k` breaks.

use crate::digits;
use crate::event::{LogLevel, emit_log};
use crate::flags::ShapeFlags;
use crate::ligature;
use crate::shape;

/// Shape one line (no `'\n'` inside) into presentation forms.
///
/// Walks a current+lookahead window over the characters: ligature folding
/// runs first at each position (it changes which identity governs shape
/// selection and may consume two characters), then form selection over the
/// raw neighbors, then digit localization for characters with no table
/// entry.
#[must_use]
pub fn shape_line(line: &str, flags: ShapeFlags) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut shaped = String::with_capacity(line.len());
    let localize_digits = flags.contains(ShapeFlags::LOCALIZE_DIGITS);

    let mut i = 0;
    while i < chars.len() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let token = ligature::resolve(chars[i], chars.get(i + 1).copied());
        // The character after the whole token; for a folded ligature this is
        // the one past the consumed Alef.
        let next = chars.get(i + token.consumed).copied();

        match token.letter {
            Some(letter) => {
                let form = shape::select_form(prev, letter, next);
                shaped.push(shape::glyph(letter, form));
            }
            None => shaped.push(digits::localize(chars[i], localize_digits)),
        }

        i += token.consumed;
    }

    shaped
}

/// Shape a whole text, line by line.
///
/// The result is still in logical order; [`crate::bidi::reorder`] produces
/// the display order.
#[must_use]
pub fn shape_text(text: &str, flags: ShapeFlags) -> String {
    let mut output = String::with_capacity(text.len());
    let mut lines = 0usize;

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&shape_line(line, flags));
        lines = index + 1;
    }

    emit_log(LogLevel::Debug, &format!("shaped {lines} line(s)"));
    output
}
