//! Resolved bidi text.
//!
//! [`BidiText`] owns the classes, resolved levels and paragraph table for a
//! buffer of code points. Lines are requested from it by code point range and
//! reordered on demand.
//!
//! # Examples
//!
//! ```
//! use bidi_engine::{BidiText, ResolveOptions};
//!
//! let text = BidiText::new("abc \u{05d0}\u{05d1}\u{05d2}", ResolveOptions::default());
//! assert_eq!(text.paragraphs().len(), 1);
//!
//! let line = text.line(0..text.len()).unwrap();
//! assert_eq!(line.visual_order(), vec![0, 1, 2, 3, 6, 5, 4]);
//! ```

mod line;

pub use line::{Line, Mirror, Mirrors};

use std::ops::Range;

use crate::class::BidiClass;
use crate::error::{Error, Result};
use crate::level::Level;
use crate::paragraph::{Paragraph, ResolveOptions, split_with_codepoints};
use crate::resolver::resolve_paragraph;
use crate::unicode::{Bracket, PropertyLookup, UnicodeLookup};

/// A buffer of code points with every paragraph resolved.
#[derive(Clone, Debug, Default)]
pub struct BidiText {
    codepoints: Vec<char>,
    classes: Vec<BidiClass>,
    levels: Vec<Level>,
    paragraphs: Vec<Paragraph>,
    /// Sorted by index.
    mirrors: Vec<(usize, char)>,
}

impl BidiText {
    /// Resolve `text` with the bundled Unicode data.
    #[must_use]
    pub fn new(text: &str, options: ResolveOptions) -> Self {
        Self::with_lookup(text.chars(), &UnicodeLookup, options)
    }

    /// Resolve code points using a caller-provided property source.
    pub fn with_lookup<I, P>(chars: I, lookup: &P, options: ResolveOptions) -> Self
    where
        I: IntoIterator<Item = char>,
        P: PropertyLookup + ?Sized,
    {
        let codepoints: Vec<char> = chars.into_iter().collect();
        let classes: Vec<BidiClass> = codepoints.iter().map(|&ch| lookup.class_of(ch)).collect();
        let brackets: Vec<Option<Bracket>> =
            codepoints.iter().map(|&ch| lookup.bracket_of(ch)).collect();
        let mirrors = codepoints
            .iter()
            .enumerate()
            .filter_map(|(index, &ch)| lookup.mirror_of(ch).map(|mirror| (index, mirror)))
            .collect();
        Self::resolve(codepoints, classes, &brackets, mirrors, options)
    }

    /// Resolve a bare class buffer. No bracket pairs are formed and there is
    /// no mirror data, so every B separates paragraphs on its own.
    #[must_use]
    pub fn from_classes(classes: &[BidiClass], options: ResolveOptions) -> Self {
        Self::resolve(Vec::new(), classes.to_vec(), &[], Vec::new(), options)
    }

    fn resolve(
        codepoints: Vec<char>,
        classes: Vec<BidiClass>,
        brackets: &[Option<Bracket>],
        mirrors: Vec<(usize, char)>,
        options: ResolveOptions,
    ) -> Self {
        let paragraphs = split_with_codepoints(
            &classes,
            (!codepoints.is_empty()).then_some(codepoints.as_slice()),
            &options,
        );

        let mut levels = Vec::with_capacity(classes.len());
        for paragraph in &paragraphs {
            let range = paragraph.range();
            let paragraph_brackets = brackets.get(range.clone()).unwrap_or(&[]);
            levels.extend(resolve_paragraph(
                &classes[range],
                paragraph_brackets,
                paragraph.base_level(),
            ));
        }

        Self {
            codepoints,
            classes,
            levels,
            paragraphs,
            mirrors,
        }
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The code points, or an empty slice for a class-only buffer.
    #[must_use]
    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    /// Original bidi classes, one per code point.
    #[must_use]
    pub fn classes(&self) -> &[BidiClass] {
        &self.classes
    }

    /// Resolved levels before the line rules, one per code point.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[must_use]
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    /// The paragraph containing code point `index`.
    #[must_use]
    pub fn paragraph_at(&self, index: usize) -> Option<&Paragraph> {
        let found = self
            .paragraphs
            .partition_point(|paragraph| paragraph.range().end <= index);
        self.paragraphs
            .get(found)
            .filter(|paragraph| paragraph.range().contains(&index))
    }

    /// The paragraph spanning exactly `range`.
    pub fn paragraph_for_range(&self, range: Range<usize>) -> Result<&Paragraph> {
        self.paragraph_at(range.start)
            .filter(|paragraph| paragraph.range() == range)
            .ok_or_else(|| Error::invalid_range(&range, self.len()))
    }

    /// A line covering `range`, which must be non-empty and lie within one
    /// paragraph.
    pub fn line(&self, range: Range<usize>) -> Result<Line<'_>> {
        if range.start >= range.end || range.end > self.len() {
            return Err(Error::invalid_range(&range, self.len()));
        }
        let paragraph = self
            .paragraph_at(range.start)
            .filter(|paragraph| paragraph.contains_range(&range))
            .ok_or_else(|| Error::invalid_range(&range, self.len()))?;
        Ok(Line::new(self, paragraph, range))
    }

    /// One line per paragraph, in logical order.
    pub fn paragraph_lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        self.paragraphs
            .iter()
            .map(|paragraph| Line::new(self, paragraph, paragraph.range()))
    }

    pub(crate) fn mirrors_in(&self, range: Range<usize>) -> &[(usize, char)] {
        let start = self.mirrors.partition_point(|&(index, _)| index < range.start);
        let end = self.mirrors.partition_point(|&(index, _)| index < range.end);
        &self.mirrors[start..end]
    }
}
