//! Fuzz target for resolving raw class buffers.
//!
//! Arbitrary class sequences, including unbalanced and deeply nested
//! formatting characters, must resolve without panicking.

#![no_main]

use arbitrary::Arbitrary;
use bidi_engine::{BaseDirection, BidiClass, BidiText, Direction, ResolveOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    base: u8,
    fallback_rtl: bool,
    classes: Vec<u8>,
    cut: usize,
}

fuzz_target!(|input: Input| {
    let classes: Vec<BidiClass> = input
        .classes
        .iter()
        .map(|&n| BidiClass::ALL[usize::from(n) % BidiClass::ALL.len()])
        .collect();
    let base = match input.base % 3 {
        0 => BaseDirection::Auto,
        1 => BaseDirection::Ltr,
        _ => BaseDirection::Rtl,
    };
    let fallback = if input.fallback_rtl { Direction::Rtl } else { Direction::Ltr };
    let options = ResolveOptions::default()
        .with_base_direction(base)
        .with_default_direction(fallback);

    let text = BidiText::from_classes(&classes, options);
    assert_eq!(text.levels().len(), classes.len());

    for paragraph in text.paragraphs() {
        let range = paragraph.range();
        let split = range.start + input.cut % range.len();
        if split > range.start {
            let line = text.line(range.start..split).expect("line inside paragraph");
            let _ = line.visual_runs();
        }
        let line = text.line(split..range.end).expect("line inside paragraph");
        let _ = line.visual_order();
    }
});
