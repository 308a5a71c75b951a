//! Embedding levels and directions.

use crate::class::BidiClass;
use std::fmt;

/// Deepest explicit embedding level (BD2).
pub const MAX_DEPTH: u8 = 125;

/// Highest level implicit resolution can produce.
pub const MAX_IMPLICIT_LEVEL: u8 = MAX_DEPTH + 1;

/// Text direction implied by a level's parity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Strong class matching this direction.
    #[must_use]
    pub const fn class(self) -> BidiClass {
        match self {
            Self::Ltr => BidiClass::L,
            Self::Rtl => BidiClass::R,
        }
    }

    /// Base level for a paragraph in this direction.
    #[must_use]
    pub const fn base_level(self) -> Level {
        match self {
            Self::Ltr => Level::LTR,
            Self::Rtl => Level::RTL,
        }
    }
}

/// An embedding level.
///
/// Even levels are left-to-right, odd levels right-to-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const LTR: Self = Self(0);
    pub const RTL: Self = Self(1);

    /// Create a level, rejecting values above [`MAX_IMPLICIT_LEVEL`].
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number <= MAX_IMPLICIT_LEVEL {
            Some(Self(number))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        self.0 & 1 == 1
    }

    #[must_use]
    pub const fn is_ltr(self) -> bool {
        !self.is_rtl()
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        if self.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// L or R according to parity (the embedding direction).
    #[must_use]
    pub const fn embedding_class(self) -> BidiClass {
        self.direction().class()
    }

    /// Least odd level greater than this one, if it is a valid explicit level.
    #[must_use]
    pub const fn next_rtl(self) -> Option<Self> {
        let next = (self.0 + 1) | 1;
        if next <= MAX_DEPTH {
            Some(Self(next))
        } else {
            None
        }
    }

    /// Least even level greater than this one, if it is a valid explicit level.
    #[must_use]
    pub const fn next_ltr(self) -> Option<Self> {
        let next = (self.0 + 2) & !1;
        if next <= MAX_DEPTH {
            Some(Self(next))
        } else {
            None
        }
    }

    /// Raise by `amount` during implicit resolution.
    pub(crate) const fn raise(self, amount: u8) -> Self {
        let raised = self.0 + amount;
        if raised > MAX_IMPLICIT_LEVEL {
            Self(MAX_IMPLICIT_LEVEL)
        } else {
            Self(raised)
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_and_direction() {
        assert!(Level::LTR.is_ltr());
        assert!(Level::RTL.is_rtl());
        assert_eq!(Level::new(4).unwrap().direction(), Direction::Ltr);
        assert_eq!(Level::new(7).unwrap().embedding_class(), BidiClass::R);
    }

    #[test]
    fn next_levels() {
        assert_eq!(Level::LTR.next_rtl(), Level::new(1));
        assert_eq!(Level::LTR.next_ltr(), Level::new(2));
        assert_eq!(Level::RTL.next_rtl(), Level::new(3));
        assert_eq!(Level::RTL.next_ltr(), Level::new(2));
    }

    #[test]
    fn next_levels_respect_max_depth() {
        let top = Level::new(MAX_DEPTH).unwrap();
        assert_eq!(top.next_rtl(), None);
        assert_eq!(top.next_ltr(), None);

        let below = Level::new(MAX_DEPTH - 1).unwrap();
        assert_eq!(below.next_rtl(), Level::new(MAX_DEPTH));
        assert_eq!(below.next_ltr(), None);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Level::new(MAX_IMPLICIT_LEVEL).is_some());
        assert!(Level::new(MAX_IMPLICIT_LEVEL + 1).is_none());
    }

    #[test]
    fn raise_saturates() {
        let top = Level::new(MAX_DEPTH).unwrap();
        assert_eq!(top.raise(1).number(), MAX_IMPLICIT_LEVEL);
        assert_eq!(top.raise(2).number(), MAX_IMPLICIT_LEVEL);
    }
}
