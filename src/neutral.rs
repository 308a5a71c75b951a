//! Resolving neutral and isolate formatting types (N0-N2).

use crate::bracket::BracketPair;
use crate::chain::BidiChain;
use crate::class::{BidiClass, ClassSet};

/// Apply N0 for `pairs`, then N1 and N2, to one isolating run sequence.
pub(crate) fn resolve_neutral(
    chain: &mut BidiChain,
    positions: &[usize],
    pairs: &[BracketPair],
    embedding: BidiClass,
    sos: BidiClass,
    eos: BidiClass,
) {
    resolve_brackets(chain, positions, pairs, embedding, sos);
    resolve_neutral_runs(chain, positions, embedding, sos, eos);
}

/// N0: give each bracket pair a strong direction from its content and context.
fn resolve_brackets(
    chain: &mut BidiChain,
    positions: &[usize],
    pairs: &[BracketPair],
    embedding: BidiClass,
    sos: BidiClass,
) {
    for pair in pairs {
        let mut found_embedding = false;
        let mut found_opposite = false;
        for &i in &positions[pair.opening + 1..pair.closing] {
            match chain.class(i).as_strong_for_neutrals() {
                Some(strong) if strong == embedding => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let resolved = if found_embedding {
            embedding
        } else if found_opposite {
            let context = positions[..pair.opening]
                .iter()
                .rev()
                .find_map(|&i| chain.class(i).as_strong_for_neutrals())
                .unwrap_or(sos);
            if context == embedding {
                embedding
            } else {
                context
            }
        } else {
            continue;
        };

        set_bracket(chain, positions, pair.opening, resolved);
        set_bracket(chain, positions, pair.closing, resolved);
    }
}

/// Set a bracket's class and carry it onto the marks W1 attached to it.
fn set_bracket(chain: &mut BidiChain, positions: &[usize], offset: usize, class: BidiClass) {
    chain.set_class(positions[offset], class);
    for &i in &positions[offset + 1..] {
        if chain.original(i) != BidiClass::NSM {
            break;
        }
        chain.set_class(i, class);
    }
}

/// N1 and N2: runs of NI between two strong types of the same direction take
/// that direction; every other NI takes the embedding direction.
fn resolve_neutral_runs(
    chain: &mut BidiChain,
    positions: &[usize],
    embedding: BidiClass,
    sos: BidiClass,
    eos: BidiClass,
) {
    let mut start = 0;
    while start < positions.len() {
        if !is_neutral(chain.class(positions[start])) {
            start += 1;
            continue;
        }
        let end = positions[start..]
            .iter()
            .position(|&i| !is_neutral(chain.class(i)))
            .map_or(positions.len(), |len| start + len);

        let before = if start == 0 {
            sos
        } else {
            strong_or(chain.class(positions[start - 1]), embedding)
        };
        let after = if end == positions.len() {
            eos
        } else {
            strong_or(chain.class(positions[end]), embedding)
        };
        let resolved = if before == after { before } else { embedding };

        for &i in &positions[start..end] {
            chain.set_class(i, resolved);
        }
        start = end;
    }
}

fn is_neutral(class: BidiClass) -> bool {
    class.is(ClassSet::NEUTRAL_OR_ISOLATE)
}

fn strong_or(class: BidiClass, fallback: BidiClass) -> BidiClass {
    class.as_strong_for_neutrals().unwrap_or(fallback)
}
