//! Paragraph splitting and base level detection (P1-P3).

use crate::class::BidiClass;
use crate::level::{Direction, Level};
use std::ops::Range;

/// How a paragraph's base level is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaseDirection {
    /// First strong character decides (P2/P3).
    #[default]
    Auto,
    /// Force level 0.
    Ltr,
    /// Force level 1.
    Rtl,
}

/// Resolution options.
///
/// These options are applied to every paragraph of a [`BidiText`](crate::BidiText).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Base direction for every paragraph.
    pub base_direction: BaseDirection,
    /// Direction used by [`BaseDirection::Auto`] when a paragraph has no
    /// strong character outside isolates.
    pub default_direction: Direction,
}

impl ResolveOptions {
    #[must_use]
    pub const fn with_base_direction(mut self, base_direction: BaseDirection) -> Self {
        self.base_direction = base_direction;
        self
    }

    #[must_use]
    pub const fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    /// Base level for a paragraph with the given classes.
    #[must_use]
    pub fn base_level(&self, classes: &[BidiClass]) -> Level {
        match self.base_direction {
            BaseDirection::Ltr => Level::LTR,
            BaseDirection::Rtl => Level::RTL,
            BaseDirection::Auto => first_strong(classes.iter().copied())
                .unwrap_or(self.default_direction)
                .base_level(),
        }
    }
}

/// One paragraph of a text: a half-open range of code point indices plus its
/// base level. The terminating separator, if any, belongs to the paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    pub(crate) index: usize,
    pub(crate) range: Range<usize>,
    pub(crate) base_level: Level,
}

impl Paragraph {
    /// Position of this paragraph within its text.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[must_use]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.base_level.direction()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether `range` lies entirely inside this paragraph.
    #[must_use]
    pub fn contains_range(&self, range: &Range<usize>) -> bool {
        range.start >= self.range.start && range.end <= self.range.end
    }
}

/// Split a class buffer into paragraphs (P1) and pick each base level.
#[must_use]
pub fn split_paragraphs(classes: &[BidiClass], options: &ResolveOptions) -> Vec<Paragraph> {
    split_with_codepoints(classes, None, options)
}

/// Split with code points available, so that CR LF counts as one separator.
pub(crate) fn split_with_codepoints(
    classes: &[BidiClass],
    codepoints: Option<&[char]>,
    options: &ResolveOptions,
) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < classes.len() {
        if classes[i] == BidiClass::B {
            let mut end = i + 1;
            if let Some(cps) = codepoints {
                if cps.get(i) == Some(&'\r') && cps.get(end) == Some(&'\n') {
                    end += 1;
                }
            }
            push_paragraph(&mut paragraphs, classes, start..end, options);
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    if start < classes.len() {
        push_paragraph(&mut paragraphs, classes, start..classes.len(), options);
    }

    paragraphs
}

fn push_paragraph(
    paragraphs: &mut Vec<Paragraph>,
    classes: &[BidiClass],
    range: Range<usize>,
    options: &ResolveOptions,
) {
    let base_level = options.base_level(&classes[range.clone()]);
    tracing::trace!(?range, base_level = base_level.number(), "paragraph");
    paragraphs.push(Paragraph {
        index: paragraphs.len(),
        range,
        base_level,
    });
}

/// Direction of the first strong character, skipping isolate spans (P2).
///
/// A PDI that closes no isolate opened inside the scan is passed over, and a
/// paragraph separator ends the scan. FSI callers bound the input at the
/// matching PDI themselves.
pub(crate) fn first_strong(classes: impl IntoIterator<Item = BidiClass>) -> Option<Direction> {
    let mut isolate_depth = 0usize;
    for class in classes {
        match class {
            BidiClass::L if isolate_depth == 0 => return Some(Direction::Ltr),
            BidiClass::R | BidiClass::AL if isolate_depth == 0 => return Some(Direction::Rtl),
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => isolate_depth += 1,
            BidiClass::PDI => isolate_depth = isolate_depth.saturating_sub(1),
            BidiClass::B => return None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn ranges(paragraphs: &[Paragraph]) -> Vec<Range<usize>> {
        paragraphs.iter().map(Paragraph::range).collect()
    }

    #[test]
    fn single_paragraph_without_separator() {
        let paragraphs = split_paragraphs(&[L, L, L], &ResolveOptions::default());
        assert_eq!(ranges(&paragraphs), vec![0..3]);
        assert_eq!(paragraphs[0].base_level(), Level::LTR);
    }

    #[test]
    fn separator_belongs_to_preceding_paragraph() {
        let paragraphs = split_paragraphs(&[L, B, R, R], &ResolveOptions::default());
        assert_eq!(ranges(&paragraphs), vec![0..2, 2..4]);
        assert_eq!(paragraphs[0].base_level(), Level::LTR);
        assert_eq!(paragraphs[1].base_level(), Level::RTL);
        assert_eq!(paragraphs[1].index(), 1);
    }

    #[test]
    fn trailing_separator_does_not_open_empty_paragraph() {
        let paragraphs = split_paragraphs(&[R, B], &ResolveOptions::default());
        assert_eq!(ranges(&paragraphs), vec![0..2]);
    }

    #[test]
    fn empty_buffer_has_no_paragraphs() {
        assert!(split_paragraphs(&[], &ResolveOptions::default()).is_empty());
    }

    #[test]
    fn crlf_is_one_separator() {
        let cps = ['a', '\r', '\n', 'b'];
        let classes = [L, B, B, L];
        let paragraphs = split_with_codepoints(&classes, Some(&cps), &ResolveOptions::default());
        assert_eq!(ranges(&paragraphs), vec![0..3, 3..4]);

        let class_only = split_paragraphs(&classes, &ResolveOptions::default());
        assert_eq!(ranges(&class_only), vec![0..2, 2..3, 3..4]);
    }

    #[test]
    fn first_strong_skips_isolates() {
        assert_eq!(first_strong([ON, RLI, L, PDI, AL]), Some(Direction::Rtl));
        assert_eq!(first_strong([LRI, R, R]), None);
        assert_eq!(first_strong([EN, AN, WS]), None);
    }

    #[test]
    fn first_strong_passes_over_unmatched_pdi() {
        assert_eq!(first_strong([ON, PDI, R]), Some(Direction::Rtl));
        assert_eq!(first_strong([LRI, PDI, R, PDI]), Some(Direction::Rtl));
        assert_eq!(first_strong([ON, B, R]), None);
    }

    #[test]
    fn forced_and_fallback_directions() {
        let forced = ResolveOptions::default().with_base_direction(BaseDirection::Rtl);
        assert_eq!(forced.base_level(&[L]), Level::RTL);

        let fallback = ResolveOptions::default().with_default_direction(Direction::Rtl);
        assert_eq!(fallback.base_level(&[EN, WS]), Level::RTL);
        assert_eq!(fallback.base_level(&[WS, L]), Level::LTR);
    }

    #[test]
    fn contains_range_checks_both_ends() {
        let paragraph = Paragraph {
            index: 0,
            range: 4..10,
            base_level: Level::LTR,
        };
        assert!(paragraph.contains_range(&(4..10)));
        assert!(paragraph.contains_range(&(5..7)));
        assert!(!paragraph.contains_range(&(3..7)));
        assert!(!paragraph.contains_range(&(8..11)));
    }
}
