//! The Arabic letter registry.
//!
//! Maps each recognized letter to its canonical identity ([`Letter`]), its
//! joining category ([`JoiningCategory`]) and its contextual presentation
//! forms ([`PresentationForms`]). The registry is closed: characters without
//! an entry are not part of the shaping system and pass through unchanged.
//!
//! Forms are stored as one structured record per identity. A slot a letter
//! does not have (an isolator's initial/medial forms, all of tatweel's
//! joined forms) is `None`, never a sentinel character.

/// Joining category of a recognized letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoiningCategory {
    /// Receives a join from the left and extends one to the right
    /// (has initial and medial forms).
    Connector,
    /// Receives a join from the left but never extends one to the right
    /// (isolated and final forms only).
    Isolator,
}

/// Contextual presentation forms of a letter.
///
/// `isolated` is the canonical codepoint itself: a letter whose selected
/// form has no glyph of its own renders unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentationForms {
    pub isolated: char,
    pub initial: Option<char>,
    pub medial: Option<char>,
    pub terminal: Option<char>,
}

const fn dual(isolated: char, initial: char, medial: char, terminal: char) -> PresentationForms {
    PresentationForms {
        isolated,
        initial: Some(initial),
        medial: Some(medial),
        terminal: Some(terminal),
    }
}

const fn right_joining(isolated: char, terminal: char) -> PresentationForms {
    PresentationForms {
        isolated,
        initial: None,
        medial: None,
        terminal: Some(terminal),
    }
}

/// Canonical identity of a recognized Arabic letter or mandatory ligature.
///
/// The set is closed; variant order is a stable key only and carries no
/// meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    Alef,
    Beh,
    Teh,
    Theh,
    Jeem,
    Hah,
    Khah,
    Dal,
    Thal,
    Reh,
    Zain,
    Seen,
    Sheen,
    Sad,
    Dad,
    Tah,
    Zah,
    Ain,
    Ghain,
    Feh,
    Qaf,
    Kaf,
    Lam,
    Meem,
    Noon,
    Heh,
    Waw,
    Yeh,
    AlefMaksura,
    AlefHamzaAbove,
    AlefHamzaBelow,
    WawHamzaAbove,
    YehHamzaAbove,
    AlefMadda,
    LamAlef,
    LamAlefHamzaBelow,
    LamAlefHamzaAbove,
    LamAlefMadda,
    TehMarbuta,
    Tatweel,
}

impl Letter {
    /// Every recognized identity, usable for exhaustive table checks.
    pub const ALL: [Self; 40] = [
        Self::Alef,
        Self::Beh,
        Self::Teh,
        Self::Theh,
        Self::Jeem,
        Self::Hah,
        Self::Khah,
        Self::Dal,
        Self::Thal,
        Self::Reh,
        Self::Zain,
        Self::Seen,
        Self::Sheen,
        Self::Sad,
        Self::Dad,
        Self::Tah,
        Self::Zah,
        Self::Ain,
        Self::Ghain,
        Self::Feh,
        Self::Qaf,
        Self::Kaf,
        Self::Lam,
        Self::Meem,
        Self::Noon,
        Self::Heh,
        Self::Waw,
        Self::Yeh,
        Self::AlefMaksura,
        Self::AlefHamzaAbove,
        Self::AlefHamzaBelow,
        Self::WawHamzaAbove,
        Self::YehHamzaAbove,
        Self::AlefMadda,
        Self::LamAlef,
        Self::LamAlefHamzaBelow,
        Self::LamAlefHamzaAbove,
        Self::LamAlefMadda,
        Self::TehMarbuta,
        Self::Tatweel,
    ];

    /// Look up the identity for a character.
    ///
    /// Returns `None` for anything outside the registry, including shaped
    /// presentation-form glyphs (the transform is one-directional; the four
    /// Lam-Alef isolated forms are the only presentation codepoints that are
    /// also canonical identities).
    #[must_use]
    pub const fn lookup(c: char) -> Option<Self> {
        match c {
            '\u{0627}' => Some(Self::Alef),
            '\u{0628}' => Some(Self::Beh),
            '\u{062A}' => Some(Self::Teh),
            '\u{062B}' => Some(Self::Theh),
            '\u{062C}' => Some(Self::Jeem),
            '\u{062D}' => Some(Self::Hah),
            '\u{062E}' => Some(Self::Khah),
            '\u{062F}' => Some(Self::Dal),
            '\u{0630}' => Some(Self::Thal),
            '\u{0631}' => Some(Self::Reh),
            '\u{0632}' => Some(Self::Zain),
            '\u{0633}' => Some(Self::Seen),
            '\u{0634}' => Some(Self::Sheen),
            '\u{0635}' => Some(Self::Sad),
            '\u{0636}' => Some(Self::Dad),
            '\u{0637}' => Some(Self::Tah),
            '\u{0638}' => Some(Self::Zah),
            '\u{0639}' => Some(Self::Ain),
            '\u{063A}' => Some(Self::Ghain),
            '\u{0641}' => Some(Self::Feh),
            '\u{0642}' => Some(Self::Qaf),
            '\u{0643}' => Some(Self::Kaf),
            '\u{0644}' => Some(Self::Lam),
            '\u{0645}' => Some(Self::Meem),
            '\u{0646}' => Some(Self::Noon),
            '\u{0647}' => Some(Self::Heh),
            '\u{0648}' => Some(Self::Waw),
            '\u{064A}' => Some(Self::Yeh),
            '\u{0649}' => Some(Self::AlefMaksura),
            '\u{0623}' => Some(Self::AlefHamzaAbove),
            '\u{0625}' => Some(Self::AlefHamzaBelow),
            '\u{0624}' => Some(Self::WawHamzaAbove),
            '\u{0626}' => Some(Self::YehHamzaAbove),
            '\u{0622}' => Some(Self::AlefMadda),
            '\u{FEFB}' => Some(Self::LamAlef),
            '\u{FEF9}' => Some(Self::LamAlefHamzaBelow),
            '\u{FEF7}' => Some(Self::LamAlefHamzaAbove),
            '\u{FEF5}' => Some(Self::LamAlefMadda),
            '\u{0629}' => Some(Self::TehMarbuta),
            '\u{0640}' => Some(Self::Tatweel),
            _ => None,
        }
    }

    /// Joining category.
    ///
    /// This classification is authoritative domain data, not derivable from
    /// the forms record: tatweel is a connector with no joined forms of its
    /// own, and Alef Maksura joins forward while plain Alef does not.
    #[must_use]
    pub const fn category(self) -> JoiningCategory {
        match self {
            Self::Beh
            | Self::Teh
            | Self::Theh
            | Self::Jeem
            | Self::Hah
            | Self::Khah
            | Self::Seen
            | Self::Sheen
            | Self::Sad
            | Self::Dad
            | Self::Tah
            | Self::Zah
            | Self::Ain
            | Self::Ghain
            | Self::Feh
            | Self::Qaf
            | Self::Kaf
            | Self::Lam
            | Self::Meem
            | Self::Noon
            | Self::Heh
            | Self::Yeh
            | Self::AlefMaksura
            | Self::YehHamzaAbove
            | Self::Tatweel => JoiningCategory::Connector,
            Self::Alef
            | Self::Dal
            | Self::Thal
            | Self::Reh
            | Self::Zain
            | Self::Waw
            | Self::AlefHamzaAbove
            | Self::AlefHamzaBelow
            | Self::WawHamzaAbove
            | Self::AlefMadda
            | Self::LamAlef
            | Self::LamAlefHamzaBelow
            | Self::LamAlefHamzaAbove
            | Self::LamAlefMadda
            | Self::TehMarbuta => JoiningCategory::Isolator,
        }
    }

    /// Presentation forms record (Arabic Presentation Forms-A/B codepoints).
    #[must_use]
    pub const fn forms(self) -> PresentationForms {
        match self {
            Self::Alef => right_joining('\u{0627}', '\u{FE8E}'),
            Self::Beh => dual('\u{0628}', '\u{FE91}', '\u{FE92}', '\u{FE90}'),
            Self::Teh => dual('\u{062A}', '\u{FE97}', '\u{FE98}', '\u{FE96}'),
            Self::Theh => dual('\u{062B}', '\u{FE9B}', '\u{FE9C}', '\u{FE9A}'),
            Self::Jeem => dual('\u{062C}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}'),
            Self::Hah => dual('\u{062D}', '\u{FEA3}', '\u{FEA4}', '\u{FEA2}'),
            Self::Khah => dual('\u{062E}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}'),
            Self::Dal => right_joining('\u{062F}', '\u{FEAA}'),
            Self::Thal => right_joining('\u{0630}', '\u{FEAC}'),
            Self::Reh => right_joining('\u{0631}', '\u{FEAE}'),
            Self::Zain => right_joining('\u{0632}', '\u{FEB0}'),
            Self::Seen => dual('\u{0633}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}'),
            Self::Sheen => dual('\u{0634}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}'),
            Self::Sad => dual('\u{0635}', '\u{FEBB}', '\u{FEBC}', '\u{FEBA}'),
            Self::Dad => dual('\u{0636}', '\u{FEBF}', '\u{FEC0}', '\u{FEBE}'),
            Self::Tah => dual('\u{0637}', '\u{FEC3}', '\u{FEC4}', '\u{FEC2}'),
            Self::Zah => dual('\u{0638}', '\u{FEC7}', '\u{FEC8}', '\u{FEC6}'),
            Self::Ain => dual('\u{0639}', '\u{FECB}', '\u{FECC}', '\u{FECA}'),
            Self::Ghain => dual('\u{063A}', '\u{FECF}', '\u{FED0}', '\u{FECE}'),
            Self::Feh => dual('\u{0641}', '\u{FED3}', '\u{FED4}', '\u{FED2}'),
            Self::Qaf => dual('\u{0642}', '\u{FED7}', '\u{FED8}', '\u{FED6}'),
            Self::Kaf => dual('\u{0643}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}'),
            Self::Lam => dual('\u{0644}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}'),
            Self::Meem => dual('\u{0645}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}'),
            Self::Noon => dual('\u{0646}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}'),
            Self::Heh => dual('\u{0647}', '\u{FEEB}', '\u{FEEC}', '\u{FEEA}'),
            Self::Waw => right_joining('\u{0648}', '\u{FEEE}'),
            Self::Yeh => dual('\u{064A}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}'),
            Self::AlefMaksura => dual('\u{0649}', '\u{FBE8}', '\u{FBE9}', '\u{FEF0}'),
            Self::AlefHamzaAbove => right_joining('\u{0623}', '\u{FE84}'),
            Self::AlefHamzaBelow => right_joining('\u{0625}', '\u{FE88}'),
            Self::WawHamzaAbove => right_joining('\u{0624}', '\u{FE86}'),
            Self::YehHamzaAbove => dual('\u{0626}', '\u{FE8B}', '\u{FE8C}', '\u{FE8A}'),
            Self::AlefMadda => right_joining('\u{0622}', '\u{FE82}'),
            Self::LamAlef => right_joining('\u{FEFB}', '\u{FEFC}'),
            Self::LamAlefHamzaBelow => right_joining('\u{FEF9}', '\u{FEFA}'),
            Self::LamAlefHamzaAbove => right_joining('\u{FEF7}', '\u{FEF8}'),
            Self::LamAlefMadda => right_joining('\u{FEF5}', '\u{FEF6}'),
            Self::TehMarbuta => right_joining('\u{0629}', '\u{FE94}'),
            Self::Tatweel => PresentationForms {
                isolated: '\u{0640}',
                initial: None,
                medial: None,
                terminal: None,
            },
        }
    }

    /// The canonical (logical-order) codepoint of this identity.
    #[must_use]
    pub const fn canonical(self) -> char {
        self.forms().isolated
    }

    /// Whether this identity extends a join to the letter after it.
    #[must_use]
    pub const fn joins_forward(self) -> bool {
        matches!(self.category(), JoiningCategory::Connector)
    }
}
