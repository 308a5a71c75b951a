//! Bidirectional character classes and class masks.
//!
//! [`BidiClass`] is the 23-value `Bidi_Class` property. [`ClassSet`] packs one
//! bit per class so the resolution passes can test membership in a group of
//! classes (strong, numeric, isolate controls, ...) with a single mask.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// Unicode `Bidi_Class` property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BidiClass {
    /// Left-to-right.
    L,
    /// Right-to-left.
    R,
    /// Arabic letter.
    AL,
    /// European number.
    EN,
    /// European separator.
    ES,
    /// European terminator.
    ET,
    /// Arabic number.
    AN,
    /// Common separator.
    CS,
    /// Nonspacing mark.
    NSM,
    /// Boundary neutral.
    BN,
    /// Paragraph separator.
    B,
    /// Segment separator.
    S,
    /// Whitespace.
    WS,
    /// Other neutral.
    ON,
    /// Left-to-right embedding.
    LRE,
    /// Right-to-left embedding.
    RLE,
    /// Left-to-right override.
    LRO,
    /// Right-to-left override.
    RLO,
    /// Pop directional format.
    PDF,
    /// Left-to-right isolate.
    LRI,
    /// Right-to-left isolate.
    RLI,
    /// First strong isolate.
    FSI,
    /// Pop directional isolate.
    PDI,
}

impl BidiClass {
    /// All classes in declaration order.
    pub const ALL: [Self; 23] = [
        Self::L,
        Self::R,
        Self::AL,
        Self::EN,
        Self::ES,
        Self::ET,
        Self::AN,
        Self::CS,
        Self::NSM,
        Self::BN,
        Self::B,
        Self::S,
        Self::WS,
        Self::ON,
        Self::LRE,
        Self::RLE,
        Self::LRO,
        Self::RLO,
        Self::PDF,
        Self::LRI,
        Self::RLI,
        Self::FSI,
        Self::PDI,
    ];

    /// Single-bit mask for this class.
    #[must_use]
    pub const fn mask(self) -> ClassSet {
        ClassSet::from_bits_retain(1 << self as u32)
    }

    /// Whether this class belongs to `set`.
    #[must_use]
    pub const fn is(self, set: ClassSet) -> bool {
        set.bits() & (1 << self as u32) != 0
    }

    #[must_use]
    pub const fn is_strong(self) -> bool {
        self.is(ClassSet::STRONG)
    }

    #[must_use]
    pub const fn is_isolate_initiator(self) -> bool {
        self.is(ClassSet::ISOLATE_INITIATOR)
    }

    /// Whether X9 removes this class from level resolution.
    #[must_use]
    pub const fn is_removed_by_x9(self) -> bool {
        self.is(ClassSet::REMOVED_BY_X9)
    }

    /// UCD short name.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::R => "R",
            Self::AL => "AL",
            Self::EN => "EN",
            Self::ES => "ES",
            Self::ET => "ET",
            Self::AN => "AN",
            Self::CS => "CS",
            Self::NSM => "NSM",
            Self::BN => "BN",
            Self::B => "B",
            Self::S => "S",
            Self::WS => "WS",
            Self::ON => "ON",
            Self::LRE => "LRE",
            Self::RLE => "RLE",
            Self::LRO => "LRO",
            Self::RLO => "RLO",
            Self::PDF => "PDF",
            Self::LRI => "LRI",
            Self::RLI => "RLI",
            Self::FSI => "FSI",
            Self::PDI => "PDI",
        }
    }

    /// Strong direction used by N0 and N1: EN and AN count as R.
    pub(crate) const fn as_strong_for_neutrals(self) -> Option<Self> {
        match self {
            Self::L => Some(Self::L),
            Self::R | Self::AL | Self::EN | Self::AN => Some(Self::R),
            _ => None,
        }
    }
}

impl fmt::Display for BidiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when parsing an unknown class name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseClassError(pub String);

impl fmt::Display for ParseClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bidi class: {:?}", self.0)
    }
}

impl std::error::Error for ParseClassError {}

impl FromStr for BidiClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.short_name() == s)
            .ok_or_else(|| ParseClassError(s.to_string()))
    }
}

bitflags! {
    /// Set of bidi classes, one bit per [`BidiClass`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ClassSet: u32 {
        const L   = 1 << 0;
        const R   = 1 << 1;
        const AL  = 1 << 2;
        const EN  = 1 << 3;
        const ES  = 1 << 4;
        const ET  = 1 << 5;
        const AN  = 1 << 6;
        const CS  = 1 << 7;
        const NSM = 1 << 8;
        const BN  = 1 << 9;
        const B   = 1 << 10;
        const S   = 1 << 11;
        const WS  = 1 << 12;
        const ON  = 1 << 13;
        const LRE = 1 << 14;
        const RLE = 1 << 15;
        const LRO = 1 << 16;
        const RLO = 1 << 17;
        const PDF = 1 << 18;
        const LRI = 1 << 19;
        const RLI = 1 << 20;
        const FSI = 1 << 21;
        const PDI = 1 << 22;

        /// L, R and AL.
        const STRONG = Self::L.bits() | Self::R.bits() | Self::AL.bits();
        /// EN and AN.
        const NUMBER = Self::EN.bits() | Self::AN.bits();
        /// LRI, RLI and FSI.
        const ISOLATE_INITIATOR = Self::LRI.bits() | Self::RLI.bits() | Self::FSI.bits();
        /// Isolate initiators and PDI.
        const ISOLATE_CONTROL = Self::ISOLATE_INITIATOR.bits() | Self::PDI.bits();
        /// LRE, RLE, LRO and RLO.
        const EMBEDDING_INITIATOR =
            Self::LRE.bits() | Self::RLE.bits() | Self::LRO.bits() | Self::RLO.bits();
        /// Classes removed from level resolution by X9.
        const REMOVED_BY_X9 = Self::EMBEDDING_INITIATOR.bits() | Self::PDF.bits() | Self::BN.bits();
        /// Neutral and isolate formatting classes (NI) resolved by N1 and N2.
        const NEUTRAL_OR_ISOLATE = Self::B.bits()
            | Self::S.bits()
            | Self::WS.bits()
            | Self::ON.bits()
            | Self::ISOLATE_CONTROL.bits();
        /// Classes that L1 resets when they trail a line or precede a separator.
        const TRAILING_WHITESPACE =
            Self::WS.bits() | Self::ISOLATE_CONTROL.bits() | Self::REMOVED_BY_X9.bits();
    }
}

impl From<BidiClass> for ClassSet {
    fn from(class: BidiClass) -> Self {
        class.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_line_up_with_named_flags() {
        assert_eq!(BidiClass::L.mask(), ClassSet::L);
        assert_eq!(BidiClass::NSM.mask(), ClassSet::NSM);
        assert_eq!(BidiClass::PDI.mask(), ClassSet::PDI);
        for class in BidiClass::ALL {
            assert_eq!(class.mask().bits().count_ones(), 1);
        }
    }

    #[test]
    fn composite_sets() {
        assert!(BidiClass::AL.is_strong());
        assert!(!BidiClass::EN.is_strong());
        assert!(BidiClass::FSI.is_isolate_initiator());
        assert!(!BidiClass::PDI.is_isolate_initiator());
        assert!(BidiClass::PDI.is(ClassSet::ISOLATE_CONTROL));
        assert!(BidiClass::BN.is_removed_by_x9());
        assert!(BidiClass::RLO.is_removed_by_x9());
        assert!(!BidiClass::RLI.is_removed_by_x9());
        assert!(BidiClass::WS.is(ClassSet::NEUTRAL_OR_ISOLATE));
        assert!(!BidiClass::NSM.is(ClassSet::NEUTRAL_OR_ISOLATE));
    }

    #[test]
    fn short_names_round_trip() {
        for class in BidiClass::ALL {
            assert_eq!(class.short_name().parse::<BidiClass>(), Ok(class));
        }
        assert!("XX".parse::<BidiClass>().is_err());
    }

    #[test]
    fn numbers_count_as_rtl_for_neutrals() {
        assert_eq!(BidiClass::EN.as_strong_for_neutrals(), Some(BidiClass::R));
        assert_eq!(BidiClass::AN.as_strong_for_neutrals(), Some(BidiClass::R));
        assert_eq!(BidiClass::L.as_strong_for_neutrals(), Some(BidiClass::L));
        assert_eq!(BidiClass::ON.as_strong_for_neutrals(), None);
    }
}
