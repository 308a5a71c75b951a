//! Explicit levels and directions (X1-X9).
//!
//! One forward walk over the chain maintains the directional status stack.
//! Embedding controls, PDF and BN are unlinked from the chain (X9); isolate
//! controls keep their place and receive the level of the context around them.

use crate::chain::BidiChain;
use crate::class::BidiClass;
use crate::level::{Direction, Level, MAX_DEPTH};
use crate::paragraph::first_strong;

/// Override status of a stack entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OverrideStatus {
    Neutral,
    Ltr,
    Rtl,
}

impl OverrideStatus {
    fn apply(self, class: BidiClass) -> BidiClass {
        match self {
            Self::Neutral => class,
            Self::Ltr => BidiClass::L,
            Self::Rtl => BidiClass::R,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StatusEntry {
    level: Level,
    override_status: OverrideStatus,
    isolate: bool,
}

/// Room for the paragraph entry plus one entry per valid explicit level.
const STACK_CAPACITY: usize = MAX_DEPTH as usize + 2;

/// Directional status stack with the overflow counters of X1.
pub(crate) struct DirectionalStatusStack {
    entries: [StatusEntry; STACK_CAPACITY],
    depth: usize,
    overflow_isolates: usize,
    overflow_embeddings: usize,
    valid_isolates: usize,
}

impl DirectionalStatusStack {
    pub fn new(base_level: Level) -> Self {
        let base = StatusEntry {
            level: base_level,
            override_status: OverrideStatus::Neutral,
            isolate: false,
        };
        Self {
            entries: [base; STACK_CAPACITY],
            depth: 1,
            overflow_isolates: 0,
            overflow_embeddings: 0,
            valid_isolates: 0,
        }
    }

    fn top(&self) -> StatusEntry {
        self.entries[self.depth - 1]
    }

    pub fn level(&self) -> Level {
        self.top().level
    }

    pub fn override_status(&self) -> OverrideStatus {
        self.top().override_status
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[cfg(test)]
    pub fn overflow_isolates(&self) -> usize {
        self.overflow_isolates
    }

    #[cfg(test)]
    pub fn overflow_embeddings(&self) -> usize {
        self.overflow_embeddings
    }

    fn next_level(&self, rtl: bool) -> Option<Level> {
        if rtl {
            self.level().next_rtl()
        } else {
            self.level().next_ltr()
        }
    }

    fn has_room(&self) -> bool {
        self.overflow_isolates == 0 && self.overflow_embeddings == 0
    }

    fn push(&mut self, entry: StatusEntry) {
        self.entries[self.depth] = entry;
        self.depth += 1;
    }

    /// X2-X5: RLE, LRE, RLO, LRO.
    pub fn push_embedding(&mut self, rtl: bool, override_status: OverrideStatus) {
        match self.next_level(rtl) {
            Some(level) if self.has_room() => self.push(StatusEntry {
                level,
                override_status,
                isolate: false,
            }),
            _ => {
                if self.overflow_isolates == 0 {
                    self.overflow_embeddings += 1;
                    tracing::debug!(
                        count = self.overflow_embeddings,
                        level = self.level().number(),
                        "embedding overflow"
                    );
                }
            }
        }
    }

    /// X5a-X5c: RLI, LRI, FSI (after the initiator itself got its level).
    pub fn push_isolate(&mut self, rtl: bool) {
        match self.next_level(rtl) {
            Some(level) if self.has_room() => {
                self.valid_isolates += 1;
                self.push(StatusEntry {
                    level,
                    override_status: OverrideStatus::Neutral,
                    isolate: true,
                });
            }
            _ => {
                self.overflow_isolates += 1;
                tracing::debug!(
                    count = self.overflow_isolates,
                    level = self.level().number(),
                    "isolate overflow"
                );
            }
        }
    }

    /// X6a: PDI. Closes the innermost valid isolate along with any
    /// embeddings opened inside it.
    pub fn pop_isolate(&mut self) {
        if self.overflow_isolates > 0 {
            self.overflow_isolates -= 1;
        } else if self.valid_isolates > 0 {
            self.overflow_embeddings = 0;
            while !self.top().isolate {
                self.depth -= 1;
            }
            self.depth -= 1;
            self.valid_isolates -= 1;
        }
    }

    /// X7: PDF.
    pub fn pop_embedding(&mut self) {
        if self.overflow_isolates > 0 {
            return;
        }
        if self.overflow_embeddings > 0 {
            self.overflow_embeddings -= 1;
        } else if !self.top().isolate && self.depth >= 2 {
            self.depth -= 1;
        }
    }
}

/// For every isolate initiator, the position of its matching PDI (BD9).
///
/// The table is parallel to `classes`; entries for other positions and for
/// unmatched initiators are `None`.
pub(crate) fn match_isolates(classes: impl IntoIterator<Item = BidiClass>) -> Vec<Option<usize>> {
    let mut matches = Vec::new();
    let mut open = Vec::new();
    for (i, class) in classes.into_iter().enumerate() {
        matches.push(None);
        match class {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => open.push(i),
            BidiClass::PDI => {
                if let Some(initiator) = open.pop() {
                    matches[initiator] = Some(i);
                }
            }
            BidiClass::B => open.clear(),
            _ => {}
        }
    }
    matches
}

/// Apply X1-X9 to a paragraph chain.
///
/// `matching_pdi` is the [`match_isolates`] table for the chain's original
/// classes; it bounds the P2 scan that picks an FSI's direction.
pub(crate) fn resolve_explicit(chain: &mut BidiChain, matching_pdi: &[Option<usize>]) {
    let base_level = chain.base_level();
    let mut stack = DirectionalStatusStack::new(base_level);

    for i in 0..chain.len() {
        let original = chain.original(i);
        match original {
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                let rtl = matches!(original, BidiClass::RLE | BidiClass::RLO);
                let override_status = match original {
                    BidiClass::RLO => OverrideStatus::Rtl,
                    BidiClass::LRO => OverrideStatus::Ltr,
                    _ => OverrideStatus::Neutral,
                };
                chain.set_level(i, stack.level());
                stack.push_embedding(rtl, override_status);
                chain.remove(i);
            }
            BidiClass::RLI | BidiClass::LRI | BidiClass::FSI => {
                chain.set_level(i, stack.level());
                chain.set_class(i, stack.override_status().apply(original));
                let rtl = match original {
                    BidiClass::RLI => true,
                    BidiClass::LRI => false,
                    _ => {
                        let end = matching_pdi[i].unwrap_or(chain.len());
                        let inside = (i + 1..end).map(|j| chain.original(j));
                        first_strong(inside) == Some(Direction::Rtl)
                    }
                };
                stack.push_isolate(rtl);
            }
            BidiClass::PDI => {
                stack.pop_isolate();
                chain.set_level(i, stack.level());
                chain.set_class(i, stack.override_status().apply(original));
            }
            BidiClass::PDF => {
                chain.set_level(i, stack.level());
                stack.pop_embedding();
                chain.remove(i);
            }
            BidiClass::BN => {
                chain.set_level(i, stack.level());
                chain.remove(i);
            }
            BidiClass::B => chain.set_level(i, base_level),
            _ => {
                chain.set_level(i, stack.level());
                chain.set_class(i, stack.override_status().apply(original));
            }
        }
    }
}
