//! Property lookup contract and the UCD-backed default.

use crate::class::BidiClass;
use unicode_bidi::data_source::BidiDataSource;

/// Opening or closing half of a paired bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Open,
    Close,
}

/// `Bidi_Paired_Bracket` metadata for one code point.
///
/// `pair_id` is the canonical opening bracket of the pair, so two brackets
/// match when their ids are equal. Canonically equivalent brackets (U+2329 and
/// U+3008, for example) share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bracket {
    pub kind: BracketKind,
    pub pair_id: char,
}

impl Bracket {
    #[must_use]
    pub const fn open(pair_id: char) -> Self {
        Self {
            kind: BracketKind::Open,
            pair_id,
        }
    }

    #[must_use]
    pub const fn close(pair_id: char) -> Self {
        Self {
            kind: BracketKind::Close,
            pair_id,
        }
    }
}

/// Source of bidi properties for code points.
///
/// Implementations must be total: every code point maps to some class
/// (unassigned code points are ON in the default tables). The engine treats
/// lookups as pure functions.
pub trait PropertyLookup {
    /// `Bidi_Class` of `ch`.
    fn class_of(&self, ch: char) -> BidiClass;

    /// Paired bracket metadata, if `ch` is a paired bracket.
    fn bracket_of(&self, _ch: char) -> Option<Bracket> {
        None
    }

    /// `Bidi_Mirroring_Glyph` of `ch`, if it has one.
    fn mirror_of(&self, _ch: char) -> Option<char> {
        None
    }
}

impl<P: PropertyLookup + ?Sized> PropertyLookup for &P {
    fn class_of(&self, ch: char) -> BidiClass {
        (**self).class_of(ch)
    }

    fn bracket_of(&self, ch: char) -> Option<Bracket> {
        (**self).bracket_of(ch)
    }

    fn mirror_of(&self, ch: char) -> Option<char> {
        (**self).mirror_of(ch)
    }
}

/// Lookup backed by the Unicode Character Database tables shipped with
/// `unicode-bidi`, plus the in-crate mirroring table.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeLookup;

impl PropertyLookup for UnicodeLookup {
    fn class_of(&self, ch: char) -> BidiClass {
        from_ucd(unicode_bidi::bidi_class(ch))
    }

    fn bracket_of(&self, ch: char) -> Option<Bracket> {
        let matched = unicode_bidi::HardcodedBidiData.bidi_matched_opening_bracket(ch)?;
        Some(if matched.is_open {
            Bracket::open(matched.opening)
        } else {
            Bracket::close(matched.opening)
        })
    }

    fn mirror_of(&self, ch: char) -> Option<char> {
        super::mirror_glyph(ch)
    }
}

#[allow(unreachable_patterns)]
fn from_ucd(class: unicode_bidi::BidiClass) -> BidiClass {
    use unicode_bidi::BidiClass as Ucd;

    match class {
        Ucd::L => BidiClass::L,
        Ucd::R => BidiClass::R,
        Ucd::AL => BidiClass::AL,
        Ucd::EN => BidiClass::EN,
        Ucd::ES => BidiClass::ES,
        Ucd::ET => BidiClass::ET,
        Ucd::AN => BidiClass::AN,
        Ucd::CS => BidiClass::CS,
        Ucd::NSM => BidiClass::NSM,
        Ucd::BN => BidiClass::BN,
        Ucd::B => BidiClass::B,
        Ucd::S => BidiClass::S,
        Ucd::WS => BidiClass::WS,
        Ucd::ON => BidiClass::ON,
        Ucd::LRE => BidiClass::LRE,
        Ucd::RLE => BidiClass::RLE,
        Ucd::LRO => BidiClass::LRO,
        Ucd::RLO => BidiClass::RLO,
        Ucd::PDF => BidiClass::PDF,
        Ucd::LRI => BidiClass::LRI,
        Ucd::RLI => BidiClass::RLI,
        Ucd::FSI => BidiClass::FSI,
        Ucd::PDI => BidiClass::PDI,
        _ => BidiClass::ON,
    }
}
