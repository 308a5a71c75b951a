//! Per-paragraph working storage for level resolution.
//!
//! A [`BidiChain`] holds one record per code point of a paragraph. Positions
//! removed by X9 stay in the record table (their original class is still
//! needed by L1 and mirroring) but are unlinked from the traversal order, so
//! every later pass walks only the surviving positions.

use crate::class::BidiClass;
use crate::level::Level;
use crate::unicode::Bracket;

/// Resolution state of one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CodepointRecord {
    /// Class from the property lookup. Never rewritten.
    pub original: BidiClass,
    /// Class as rewritten by the explicit, weak and neutral passes.
    pub class: BidiClass,
    pub level: Level,
    pub removed: bool,
    pub bracket: Option<Bracket>,
}

/// Records for one paragraph plus doubly linked skip links.
///
/// Links are indices into the record table. Index `len` is a sentinel that
/// closes the ring, so `next[len]` is the first live position and `prev[len]`
/// the last.
#[derive(Clone, Debug)]
pub(crate) struct BidiChain {
    records: Vec<CodepointRecord>,
    next: Vec<usize>,
    prev: Vec<usize>,
    base_level: Level,
}

impl BidiChain {
    /// Build a chain from original classes. `brackets` may be empty when no
    /// bracket metadata is available; otherwise it is parallel to `classes`.
    pub fn new(classes: &[BidiClass], brackets: &[Option<Bracket>], base_level: Level) -> Self {
        let len = classes.len();
        let records = classes
            .iter()
            .enumerate()
            .map(|(i, &class)| CodepointRecord {
                original: class,
                class,
                level: base_level,
                removed: false,
                bracket: brackets.get(i).copied().flatten(),
            })
            .collect();
        let ring = len + 1;
        let next = (0..ring).map(|i| (i + 1) % ring).collect();
        let prev = (0..ring).map(|i| (i + len) % ring).collect();

        Self {
            records,
            next,
            prev,
            base_level,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn base_level(&self) -> Level {
        self.base_level
    }

    pub fn record(&self, index: usize) -> &CodepointRecord {
        &self.records[index]
    }

    pub fn original(&self, index: usize) -> BidiClass {
        self.records[index].original
    }

    pub fn class(&self, index: usize) -> BidiClass {
        self.records[index].class
    }

    pub fn set_class(&mut self, index: usize, class: BidiClass) {
        self.records[index].class = class;
    }

    pub fn level(&self, index: usize) -> Level {
        self.records[index].level
    }

    pub fn set_level(&mut self, index: usize, level: Level) {
        self.records[index].level = level;
    }

    #[cfg(test)]
    pub fn is_removed(&self, index: usize) -> bool {
        self.records[index].removed
    }

    /// Unlink `index` from traversal. Removing twice is a no-op.
    pub fn remove(&mut self, index: usize) {
        if self.records[index].removed {
            return;
        }
        let (before, after) = (self.prev[index], self.next[index]);
        self.next[before] = after;
        self.prev[after] = before;
        self.records[index].removed = true;
    }

    fn sentinel(&self) -> usize {
        self.records.len()
    }

    fn live(&self, index: usize) -> Option<usize> {
        (index != self.sentinel()).then_some(index)
    }

    pub fn first(&self) -> Option<usize> {
        self.live(self.next[self.sentinel()])
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<usize> {
        self.live(self.prev[self.sentinel()])
    }

    /// Next live position after `index`. `index` itself may be removed, in
    /// which case the nearest live position after it is returned.
    ///
    /// A removed record keeps the links it had when it was unlinked, and those
    /// only ever point at later (or earlier) records, so following them from a
    /// removed position reaches the nearest live one.
    pub fn next(&self, index: usize) -> Option<usize> {
        let mut at = self.next[index];
        while at != self.sentinel() && self.records[at].removed {
            at = self.next[at];
        }
        self.live(at)
    }

    /// Previous live position before `index`, with the same rule as [`next`](Self::next).
    pub fn prev(&self, index: usize) -> Option<usize> {
        let mut at = self.prev[index];
        while at != self.sentinel() && self.records[at].removed {
            at = self.prev[at];
        }
        self.live(at)
    }

    /// Live positions in logical order.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: self.first(),
        }
    }

    /// Live positions from `first` through `last` inclusive.
    pub fn span(&self, first: usize, last: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = Some(first);
        std::iter::from_fn(move || {
            let current = cursor?;
            cursor = if current == last {
                None
            } else {
                self.next(current)
            };
            Some(current)
        })
    }

    /// Give removed positions the level of the preceding live position (or the
    /// base level) and return all levels.
    pub fn finish_levels(&mut self) -> Vec<Level> {
        let mut carried = self.base_level;
        for record in &mut self.records {
            if record.removed {
                record.level = carried;
            } else {
                carried = record.level;
            }
        }
        self.records.iter().map(|record| record.level).collect()
    }
}

pub(crate) struct ChainIter<'a> {
    chain: &'a BidiChain,
    cursor: Option<usize>,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.cursor?;
        self.cursor = self.chain.next(current);
        Some(current)
    }
}
