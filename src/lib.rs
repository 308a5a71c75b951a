//! `bidi_engine` - Unicode Bidirectional Algorithm (UAX #9)
//!
//! Resolves embedding levels for mixed left-to-right and right-to-left text
//! and reorders lines for display. The pipeline runs per paragraph: explicit
//! embeddings and isolates, isolating run sequences, bracket pairs, weak and
//! neutral types, implicit levels, and finally the line rules.
//!
//! ```
//! use bidi_engine::{BidiText, Level, ResolveOptions};
//!
//! let text = BidiText::new("\u{05d0}\u{05d1}\u{05d2}123english", ResolveOptions::default());
//! let line = text.line(0..text.len()).unwrap();
//!
//! assert_eq!(text.levels()[0], Level::RTL);
//! assert_eq!(line.visual_order()[..6], [3, 4, 5, 6, 7, 8]);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // BidiClass in class, BidiText in text
#![allow(clippy::missing_errors_doc)] // Every error is InvalidRange
#![allow(clippy::missing_panics_doc)] // Indices are validated before use
#![allow(clippy::doc_markdown)] // Rule names like W1 and N0 read better bare
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::needless_collect)] // Collect for assertions is clear

mod bracket;
mod chain;
pub mod class;
pub mod error;
mod explicit;
pub mod implicit;
pub mod level;
mod neutral;
pub mod paragraph;
pub mod reorder;
pub mod resolver;
mod sequence;
pub mod text;
pub mod unicode;
mod weak;

pub use bracket::MAX_BRACKET_DEPTH;
pub use class::{BidiClass, ClassSet, ParseClassError};
pub use error::{Error, Result};
pub use level::{Direction, Level, MAX_DEPTH, MAX_IMPLICIT_LEVEL};
pub use paragraph::{BaseDirection, Paragraph, ResolveOptions, split_paragraphs};
pub use reorder::{VisualRun, reorder_visual};
pub use resolver::resolve_paragraph;
pub use text::{BidiText, Line, Mirror, Mirrors};
pub use unicode::{Bracket, BracketKind, PropertyLookup, UnicodeLookup};
