//! Shaping option flags.

use bitflags::bitflags;

bitflags! {
    /// Options forwarded through the shaping pipeline.
    ///
    /// The default (`empty()`) pipeline shapes letters only and leaves every
    /// other character untouched.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ShapeFlags: u8 {
        /// Replace ASCII decimal digits with Arabic-Indic digits.
        ///
        /// Applies only to characters with no letter-table entry; letter
        /// shaping is never overridden.
        const LOCALIZE_DIGITS = 0x01;
    }
}
