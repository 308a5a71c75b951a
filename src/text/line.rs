//! A single line of resolved text and its display order.

use std::ops::Range;
use std::slice;

use super::BidiText;
use crate::level::Level;
use crate::paragraph::Paragraph;
use crate::reorder::{VisualRun, line_levels, logical_runs, reorder_runs, visual_indices};

/// A span of one paragraph laid out as a single display line.
///
/// Levels are final: the line rules have been applied on top of the levels
/// resolved for the whole paragraph.
#[derive(Clone, Debug)]
pub struct Line<'a> {
    text: &'a BidiText,
    paragraph: &'a Paragraph,
    range: Range<usize>,
    levels: Vec<Level>,
}

impl<'a> Line<'a> {
    pub(crate) fn new(text: &'a BidiText, paragraph: &'a Paragraph, range: Range<usize>) -> Self {
        let levels = line_levels(
            &text.classes()[range.clone()],
            &text.levels()[range.clone()],
            paragraph.base_level(),
        );
        Self {
            text,
            paragraph,
            range,
            levels,
        }
    }

    /// Code point range of the line within the text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[must_use]
    pub fn paragraph(&self) -> &'a Paragraph {
        self.paragraph
    }

    #[must_use]
    pub fn base_level(&self) -> Level {
        self.paragraph.base_level()
    }

    /// Levels of the line's code points in logical order.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Level of the code point at absolute `index`, if it is on this line.
    #[must_use]
    pub fn level_at(&self, index: usize) -> Option<Level> {
        index
            .checked_sub(self.range.start)
            .and_then(|offset| self.levels.get(offset).copied())
    }

    /// Runs of equal level in left-to-right display order.
    #[must_use]
    pub fn visual_runs(&self) -> Vec<VisualRun> {
        reorder_runs(logical_runs(&self.levels, self.range.start))
    }

    /// Absolute code point indices in left-to-right display order.
    #[must_use]
    pub fn visual_order(&self) -> Vec<usize> {
        visual_indices(&self.visual_runs())
    }

    /// Every code point on the line that has a mirrored glyph.
    #[must_use]
    pub fn mirrors(&self) -> Mirrors<'_> {
        Mirrors {
            entries: self.text.mirrors_in(self.range()).iter(),
            codepoints: self.text.codepoints(),
            levels: &self.levels,
            offset: self.range.start,
        }
    }

    /// The line's code points in display order, with mirrored glyphs
    /// substituted at odd levels. `None` for text built from classes alone.
    #[must_use]
    pub fn reordered_text(&self) -> Option<String> {
        let codepoints = self.text.codepoints();
        if codepoints.is_empty() {
            return None;
        }
        let mut mirrored: Vec<char> = codepoints[self.range()].to_vec();
        for mirror in self.mirrors().filter(Mirror::should_mirror) {
            mirrored[mirror.index - self.range.start] = mirror.mirror;
        }
        Some(
            self.visual_order()
                .into_iter()
                .map(|index| mirrored[index - self.range.start])
                .collect(),
        )
    }
}

/// A code point with mirroring data and its final level on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mirror {
    pub index: usize,
    pub codepoint: char,
    pub mirror: char,
    pub level: Level,
}

impl Mirror {
    /// Whether a renderer should draw `mirror` instead of `codepoint`.
    #[must_use]
    pub const fn should_mirror(&self) -> bool {
        self.level.is_rtl()
    }
}

/// Iterator over the [`Mirror`] entries of a line, in logical order.
#[derive(Clone, Debug)]
pub struct Mirrors<'a> {
    entries: slice::Iter<'a, (usize, char)>,
    codepoints: &'a [char],
    levels: &'a [Level],
    offset: usize,
}

impl Iterator for Mirrors<'_> {
    type Item = Mirror;

    fn next(&mut self) -> Option<Mirror> {
        let &(index, mirror) = self.entries.next()?;
        Some(Mirror {
            index,
            codepoint: self.codepoints[index],
            mirror,
            level: self.levels[index - self.offset],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Mirrors<'_> {}
