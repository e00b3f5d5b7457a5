//! Arabic-Indic digit localization for characters outside the letter table.

/// Map an ASCII decimal digit to its Arabic-Indic equivalent
/// (`U+0660..=U+0669`) when `enabled`; anything else passes through.
#[must_use]
pub fn localize(c: char, enabled: bool) -> char {
    if !enabled || !c.is_ascii_digit() {
        return c;
    }
    let offset = u32::from(c) - u32::from('0');
    char::from_u32(0x0660 + offset).unwrap_or(c)
}
