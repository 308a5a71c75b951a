//! Resolving implicit levels (I1-I2).

use crate::chain::BidiChain;
use crate::class::BidiClass;
use crate::level::Level;

/// Level of a character with resolved `class` at explicit `level`.
#[must_use]
pub fn implicit_level(level: Level, class: BidiClass) -> Level {
    match (level.is_rtl(), class) {
        (false, BidiClass::R) => level.raise(1),
        (false, BidiClass::AN | BidiClass::EN) => level.raise(2),
        (true, BidiClass::L | BidiClass::AN | BidiClass::EN) => level.raise(1),
        _ => level,
    }
}

/// Apply I1 and I2 to every live position of the chain. Paragraph
/// separators keep the paragraph level set by X8.
pub(crate) fn resolve_implicit(chain: &mut BidiChain) {
    let live: Vec<usize> = chain
        .iter()
        .filter(|&i| chain.original(i) != BidiClass::B)
        .collect();
    for i in live {
        let level = implicit_level(chain.level(i), chain.class(i));
        chain.set_level(i, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn at(level: u8, class: BidiClass) -> u8 {
        implicit_level(Level::new(level).unwrap(), class).number()
    }

    #[test]
    fn even_levels() {
        assert_eq!(at(0, L), 0);
        assert_eq!(at(0, R), 1);
        assert_eq!(at(0, AN), 2);
        assert_eq!(at(0, EN), 2);
        assert_eq!(at(2, R), 3);
    }

    #[test]
    fn odd_levels() {
        assert_eq!(at(1, L), 2);
        assert_eq!(at(1, R), 1);
        assert_eq!(at(1, AN), 2);
        assert_eq!(at(1, EN), 2);
    }

    #[test]
    fn deepest_levels_stay_bounded() {
        assert_eq!(at(125, L), 126);
        assert_eq!(at(124, EN), 126);
    }

    #[test]
    fn paragraph_separator_keeps_base_level() {
        let mut chain = BidiChain::new(&[L, B], &[], Level::RTL);
        chain.set_level(0, Level::RTL);
        chain.set_level(1, Level::RTL);
        chain.set_class(1, L);
        resolve_implicit(&mut chain);
        assert_eq!(chain.level(0).number(), 2);
        assert_eq!(chain.level(1).number(), 1);
    }

    #[test]
    fn removed_positions_are_skipped() {
        let mut chain = BidiChain::new(&[R, BN], &[], Level::LTR);
        chain.remove(1);
        chain.set_class(1, R);
        resolve_implicit(&mut chain);
        assert_eq!(chain.level(0).number(), 1);
        assert_eq!(chain.level(1).number(), 0);
    }
}
