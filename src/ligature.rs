//! Mandatory Lam+Alef ligature folding.
//!
//! Runs ahead of shape selection at each position: when the current
//! character is Lam and the lookahead is one of the four Alef variants, the
//! pair folds into a single combined identity that consumes two logical
//! characters. No other digraph is recognized.

use crate::letters::Letter;

const LAM: char = '\u{0644}';

/// Fold Lam plus a following Alef variant into its combined identity.
///
/// Returns `None` when `current` is not Lam or the lookahead is not one of
/// the four recognized Alef variants (including at end of line).
#[must_use]
pub const fn fold(current: char, lookahead: Option<char>) -> Option<Letter> {
    if current != LAM {
        return None;
    }
    match lookahead {
        Some('\u{0627}') => Some(Letter::LamAlef),
        Some('\u{0623}') => Some(Letter::LamAlefHamzaAbove),
        Some('\u{0625}') => Some(Letter::LamAlefHamzaBelow),
        Some('\u{0622}') => Some(Letter::LamAlefMadda),
        _ => None,
    }
}

/// A ligature-resolved token: the identity governing shape selection at a
/// position (if any) and how many logical characters it spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub letter: Option<Letter>,
    pub consumed: usize,
}

/// Resolve the token at a position from the current character and its
/// one-character lookahead window.
#[must_use]
pub const fn resolve(current: char, lookahead: Option<char>) -> Token {
    match fold(current, lookahead) {
        Some(ligature) => Token {
            letter: Some(ligature),
            consumed: 2,
        },
        None => Token {
            letter: Letter::lookup(current),
            consumed: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_all_four_alef_variants() {
        assert_eq!(fold('ل', Some('ا')), Some(Letter::LamAlef));
        assert_eq!(fold('ل', Some('أ')), Some(Letter::LamAlefHamzaAbove));
        assert_eq!(fold('ل', Some('إ')), Some(Letter::LamAlefHamzaBelow));
        assert_eq!(fold('ل', Some('آ')), Some(Letter::LamAlefMadda));
    }

    #[test]
    fn lam_before_anything_else_does_not_fold() {
        assert_eq!(fold('ل', Some('ب')), None);
        assert_eq!(fold('ل', Some('ل')), None);
        assert_eq!(fold('ل', Some(' ')), None);
        assert_eq!(fold('ل', None), None);
        // Waw with hamza is not an Alef variant.
        assert_eq!(fold('ل', Some('ؤ')), None);
    }

    #[test]
    fn only_lam_starts_a_ligature() {
        assert_eq!(fold('ب', Some('ا')), None);
        assert_eq!(fold('ا', Some('ا')), None);
        // Kaf+Alef looks similar in some fonts but never merges.
        assert_eq!(fold('ك', Some('ا')), None);
    }

    #[test]
    fn resolve_consumes_two_on_a_fold_and_one_otherwise() {
        let folded = resolve('ل', Some('ا'));
        assert_eq!(folded.letter, Some(Letter::LamAlef));
        assert_eq!(folded.consumed, 2);

        let plain = resolve('ل', Some('ب'));
        assert_eq!(plain.letter, Some(Letter::Lam));
        assert_eq!(plain.consumed, 1);

        let unrecognized = resolve('x', Some('ا'));
        assert_eq!(unrecognized.letter, None);
        assert_eq!(unrecognized.consumed, 1);
    }
}
