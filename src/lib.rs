//! `arabic-binder` - contextual Arabic letter shaping.
//!
//! Converts a logical (memory-order) Arabic string into the presentation
//! form glyphs required for correct rendering when the output layer has no
//! native text shaping, then reorders the result into display order.
//!
//! The pipeline per line: Lam+Alef ligature folding, contextual form
//! selection (isolated/initial/medial/final) from the joining categories of
//! the raw neighbors, and optional Arabic-Indic digit localization for
//! characters outside the letter table. Joining never crosses a line
//! boundary.
//!
//! # Examples
//!
//! ```
//! use arabic_binder::{ShapeFlags, bind, shape_text};
//!
//! // Logical order in, presentation forms out. The Lam+Alef pair folds
//! // into a single ligature glyph.
//! let shaped = shape_text("سلام", ShapeFlags::empty());
//! assert_eq!(shaped, "\u{FEB3}\u{FEFC}\u{0645}");
//!
//! // `bind` additionally reorders into display order.
//! let display = bind("سلام", ShapeFlags::empty());
//! assert_eq!(display, "\u{0645}\u{FEFC}\u{FEB3}");
//! ```

#![allow(clippy::doc_markdown)] // Technical names without backticks
#![allow(clippy::module_name_repetitions)]

pub mod bidi;
pub mod digits;
pub mod error;
pub mod event;
pub mod flags;
pub mod letters;
pub mod ligature;
pub mod line;
pub mod shape;

// Re-export the core types at the crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use flags::ShapeFlags;
pub use letters::{JoiningCategory, Letter, PresentationForms};
pub use line::{shape_line, shape_text};
pub use shape::ShapeForm;

/// Shape `text` and return it in display order.
///
/// The sole operation the surrounding system needs: shapes every line into
/// presentation forms, then runs the bidirectional reorder step once over
/// the fully assembled string.
///
/// Re-running `bind` on its own output is not a no-op: shaping is
/// one-directional (presentation forms are not letter-table keys) and
/// reordering already-reordered text reverses it again.
#[must_use]
pub fn bind(text: &str, flags: ShapeFlags) -> String {
    bidi::reorder(&line::shape_text(text, flags))
}
