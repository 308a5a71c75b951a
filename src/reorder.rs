//! Line-level adjustments and visual reordering (L1-L2).

use std::ops::Range;

use crate::class::{BidiClass, ClassSet};
use crate::level::{Direction, Level};

/// A maximal span of one line whose code points share an embedding level.
///
/// `start` is an absolute code point index into the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualRun {
    pub start: usize,
    pub len: usize,
    pub level: Level,
}

impl VisualRun {
    /// Direction the run's code points are displayed in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.level.direction()
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Apply L1 to the levels of one line.
///
/// `original` holds the classes before any rule ran. Segment and paragraph
/// separators, and any whitespace or isolate formatting characters before
/// them or at the end of the line, are reset to `paragraph_level`. Characters
/// removed by X9 count as whitespace here.
#[must_use]
pub fn line_levels(original: &[BidiClass], levels: &[Level], paragraph_level: Level) -> Vec<Level> {
    debug_assert_eq!(original.len(), levels.len());
    let mut line = levels.to_vec();
    let mut trailing = true;
    for (level, &class) in line.iter_mut().zip(original).rev() {
        if matches!(class, BidiClass::S | BidiClass::B) {
            *level = paragraph_level;
            trailing = true;
        } else if class.is(ClassSet::TRAILING_WHITESPACE) {
            if trailing {
                *level = paragraph_level;
            }
        } else {
            trailing = false;
        }
    }
    line
}

/// Split line levels into runs of equal level, in logical order.
///
/// `offset` is the absolute index of `levels[0]`.
#[must_use]
pub fn logical_runs(levels: &[Level], offset: usize) -> Vec<VisualRun> {
    let mut runs: Vec<VisualRun> = Vec::new();
    for (i, &level) in levels.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.level == level => run.len += 1,
            _ => runs.push(VisualRun {
                start: offset + i,
                len: 1,
                level,
            }),
        }
    }
    runs
}

/// Apply L2 to runs in logical order, returning them in display order.
///
/// From the highest level down to the lowest odd level on the line, every
/// maximal sequence of runs at that level or higher is reversed.
#[must_use]
pub fn reorder_runs(mut runs: Vec<VisualRun>) -> Vec<VisualRun> {
    let Some(highest) = runs.iter().map(|run| run.level.number()).max() else {
        return runs;
    };
    let lowest = runs.iter().map(|run| run.level.number()).min().unwrap_or(highest);
    let lowest_odd = lowest | 1;

    for threshold in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < runs.len() {
            if runs[i].level.number() < threshold {
                i += 1;
                continue;
            }
            let end = runs[i..]
                .iter()
                .position(|run| run.level.number() < threshold)
                .map_or(runs.len(), |len| i + len);
            runs[i..end].reverse();
            i = end;
        }
    }
    runs
}

/// Absolute code point indices in display order for runs already in display
/// order. Right-to-left runs contribute their indices backwards.
#[must_use]
pub fn visual_indices(runs: &[VisualRun]) -> Vec<usize> {
    let mut order = Vec::with_capacity(runs.iter().map(|run| run.len).sum());
    for run in runs {
        if run.level.is_rtl() {
            order.extend(run.range().rev());
        } else {
            order.extend(run.range());
        }
    }
    order
}

/// Display order of `levels`, as indices into `levels`.
#[must_use]
pub fn reorder_visual(levels: &[Level]) -> Vec<usize> {
    visual_indices(&reorder_runs(logical_runs(levels, 0)))
}
