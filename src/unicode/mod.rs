//! Per-code-point bidi properties.
//!
//! The resolution passes never look at code points directly. They consume the
//! class, bracket and mirror metadata produced by a [`PropertyLookup`]. The
//! default [`UnicodeLookup`] is backed by the UCD tables bundled with
//! `unicode-bidi`.

mod lookup;
mod mirror;

pub use lookup::{Bracket, BracketKind, PropertyLookup, UnicodeLookup};
pub use mirror::mirror_glyph;
