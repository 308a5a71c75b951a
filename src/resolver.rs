//! Level resolution for a single paragraph.
//!
//! Runs the passes in rule order over one [`BidiChain`]:
//! explicit levels, isolating run sequences, then brackets, weak types and
//! neutral types per sequence, and finally implicit levels.

use crate::bracket::locate_pairs;
use crate::chain::BidiChain;
use crate::class::BidiClass;
use crate::explicit::{match_isolates, resolve_explicit};
use crate::implicit::resolve_implicit;
use crate::level::Level;
use crate::neutral::resolve_neutral;
use crate::sequence::{isolating_run_sequences, level_runs};
use crate::unicode::Bracket;
use crate::weak::resolve_weak;

/// Resolve the embedding level of every code point in one paragraph.
///
/// `classes` must not contain a paragraph separator except as its last
/// element. `brackets` is parallel to `classes`, or empty when no bracket
/// metadata is available. The result does not include the line rules (L1).
#[must_use]
pub fn resolve_paragraph(
    classes: &[BidiClass],
    brackets: &[Option<Bracket>],
    base_level: Level,
) -> Vec<Level> {
    let matching_pdi = match_isolates(classes.iter().copied());
    let mut chain = BidiChain::new(classes, brackets, base_level);
    resolve_explicit(&mut chain, &matching_pdi);

    let runs = level_runs(&chain);
    for sequence in isolating_run_sequences(&chain, &runs, &matching_pdi) {
        let positions = sequence.positions(&chain, &runs);
        let pairs = locate_pairs(&chain, &positions);
        resolve_weak(&mut chain, &positions, sequence.sos);
        resolve_neutral(
            &mut chain,
            &positions,
            &pairs,
            sequence.level.embedding_class(),
            sequence.sos,
            sequence.eos,
        );
    }

    resolve_implicit(&mut chain);
    chain.finish_levels()
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn levels(classes: &[BidiClass], base: Level) -> Vec<u8> {
        resolve_paragraph(classes, &[], base)
            .into_iter()
            .map(Level::number)
            .collect()
    }

    #[test]
    fn all_ltr() {
        assert_eq!(levels(&[L, L, L], Level::LTR), vec![0, 0, 0]);
    }

    #[test]
    fn hebrew_digits_english() {
        let mut classes = vec![R; 6];
        classes.extend([EN; 3]);
        classes.extend([L; 7]);
        assert_eq!(
            levels(&classes, Level::LTR),
            vec![1, 1, 1, 1, 1, 1, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn arabic_letters_with_digits() {
        // AL EN becomes R AN: the digits go one level up inside the RTL run.
        assert_eq!(levels(&[AL, EN, EN, AL], Level::RTL), vec![1, 2, 2, 1]);
    }

    #[test]
    fn neutral_between_rtl_runs() {
        assert_eq!(levels(&[R, WS, R, WS, L], Level::LTR), vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn ltr_text_in_rtl_paragraph() {
        assert_eq!(levels(&[R, WS, L, L, WS, R], Level::RTL), vec![1, 1, 2, 2, 1, 1]);
    }

    #[test]
    fn isolate_interior_resolved_separately() {
        // R RLI L L PDI R in an LTR paragraph: the initiator and PDI sit in the
        // outer sequence between R characters.
        assert_eq!(
            levels(&[R, RLI, L, L, PDI, R], Level::LTR),
            vec![1, 1, 2, 2, 1, 1]
        );
    }

    #[test]
    fn removed_characters_take_previous_level() {
        assert_eq!(levels(&[R, BN, R], Level::LTR), vec![1, 1, 1]);
        assert_eq!(levels(&[BN, L], Level::RTL), vec![1, 2]);
    }

    #[test]
    fn override_forces_direction() {
        assert_eq!(levels(&[RLO, L, L, PDF], Level::LTR), vec![0, 1, 1, 1]);
    }

    #[test]
    fn bracket_context_reaches_back_across_isolate() {
        // AN L RLI R PDI CS ( R ): the pair holds only R, and the strong
        // context before it is the L ahead of the isolate, not the AN.
        let classes = [AN, L, RLI, R, PDI, CS, ON, R, ON];
        let mut brackets = vec![None; classes.len()];
        brackets[6] = Some(Bracket::open('('));
        brackets[8] = Some(Bracket::close('('));
        let levels: Vec<u8> = resolve_paragraph(&classes, &brackets, Level::LTR)
            .into_iter()
            .map(Level::number)
            .collect();
        assert_eq!(levels, vec![2, 0, 0, 1, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn isolate_overflow_at_deepest_embedding() {
        // 62 LREs reach 124 and an RLE reaches 125; the RLI that follows
        // overflows, so its content and the LRE inside it stay at 125.
        let mut classes = vec![LRE; 62];
        classes.extend([RLE, R, RLI, L, LRE, L, PDI, R, PDF, L]);
        let resolved = levels(&classes, Level::LTR);
        assert_eq!(
            resolved[63..].to_vec(),
            vec![125, 125, 126, 126, 126, 125, 125, 125, 124]
        );
    }
}
