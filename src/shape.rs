//! Contextual shape selection.
//!
//! Given an identity and its immediate logical neighbors, decides which of
//! the four presentation forms to emit. The decision is context-local: it
//! reads only the raw neighbor characters, never other positions' computed
//! output, so per-position results are independent given the line.

use crate::letters::{JoiningCategory, Letter};

/// The four contextual glyph forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeForm {
    Isolated,
    Initial,
    Medial,
    Final,
}

/// Select the form for `current` between its raw neighbors.
///
/// `prev` and `next` are the characters actually adjacent in the line,
/// before any ligature substitution was applied to them; `None` is the null
/// context at a line boundary and never satisfies a join.
///
/// An isolator predecessor does not extend a join forward, and an isolator
/// `current` never joins to the right regardless of what follows, so an
/// isolator only ever selects `Isolated` or `Final`.
#[must_use]
pub fn select_form(prev: Option<char>, current: Letter, next: Option<char>) -> ShapeForm {
    let connect_prev = prev
        .and_then(Letter::lookup)
        .is_some_and(Letter::joins_forward);
    let connect_next = current.category() != JoiningCategory::Isolator
        && next.and_then(Letter::lookup).is_some();

    match (connect_prev, connect_next) {
        (true, true) => ShapeForm::Medial,
        (true, false) => ShapeForm::Final,
        (false, true) => ShapeForm::Initial,
        (false, false) => ShapeForm::Isolated,
    }
}

/// The glyph for a letter in a given form.
///
/// Falls back to the canonical codepoint when the selected slot is absent
/// (tatweel's joined forms, every letter's isolated form).
#[must_use]
pub const fn glyph(letter: Letter, form: ShapeForm) -> char {
    let forms = letter.forms();
    let slot = match form {
        ShapeForm::Isolated => None,
        ShapeForm::Initial => forms.initial,
        ShapeForm::Medial => forms.medial,
        ShapeForm::Final => forms.terminal,
    };
    match slot {
        Some(c) => c,
        None => forms.isolated,
    }
}
