//! Paired bracket identification (BD14-BD16).

use crate::chain::BidiChain;
use crate::class::BidiClass;
use crate::unicode::BracketKind;

/// Most opening brackets tracked at once within one sequence.
pub const MAX_BRACKET_DEPTH: usize = 63;

/// A matched bracket pair. Indices are offsets into the sequence's position
/// list, not chain indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct BracketPair {
    pub opening: usize,
    pub closing: usize,
}

/// Find bracket pairs among `positions`, sorted by opening offset.
///
/// Only brackets whose current class is ON take part. When an opening bracket
/// finds the stack full, pairing stops for the rest of the sequence; pairs
/// already found are kept.
pub(crate) fn locate_pairs(chain: &BidiChain, positions: &[usize]) -> Vec<BracketPair> {
    let mut openers: Vec<(usize, char)> = Vec::with_capacity(MAX_BRACKET_DEPTH);
    let mut pairs = Vec::new();

    for (offset, &position) in positions.iter().enumerate() {
        let record = chain.record(position);
        let Some(bracket) = record.bracket else {
            continue;
        };
        if record.class != BidiClass::ON {
            continue;
        }

        match bracket.kind {
            BracketKind::Open => {
                if openers.len() == MAX_BRACKET_DEPTH {
                    tracing::debug!(offset, "bracket stack overflow");
                    break;
                }
                openers.push((offset, bracket.pair_id));
            }
            BracketKind::Close => {
                if let Some(depth) = openers.iter().rposition(|&(_, id)| id == bracket.pair_id) {
                    pairs.push(BracketPair {
                        opening: openers[depth].0,
                        closing: offset,
                    });
                    openers.truncate(depth);
                }
            }
        }
    }

    pairs.sort_unstable();
    pairs
}
