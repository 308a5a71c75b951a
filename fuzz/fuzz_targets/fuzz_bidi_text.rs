//! Fuzz target for resolving and reordering arbitrary strings.
//!
//! Every paragraph line must reorder to a permutation of its range, and every
//! level must stay within the implicit bound.

#![no_main]

use bidi_engine::{BidiText, MAX_IMPLICIT_LEVEL, ResolveOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let text = BidiText::new(data, ResolveOptions::default());
    assert_eq!(text.len(), data.chars().count());
    assert!(text.levels().iter().all(|l| l.number() <= MAX_IMPLICIT_LEVEL));

    for line in text.paragraph_lines() {
        let mut order = line.visual_order();
        order.sort_unstable();
        assert!(order.into_iter().eq(line.range()));

        let _ = line.reordered_text();
        let _ = line.mirrors().count();
    }
});
