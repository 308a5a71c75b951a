//! Level resolution and reordering benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use bidi_engine::{BidiClass, BidiText, ResolveOptions};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const MIXED_LINE: &str = "The title is \u{05e9}\u{05dc}\u{05d5}\u{05dd} (\u{05e2}\u{05d5}\u{05dc}\u{05dd}) 2024, \u{0645}\u{0631}\u{062d}\u{0628}\u{0627} 123.45! ";

fn resolve_ltr(c: &mut Criterion) {
    let ascii = "Hello, World! This is a plain left-to-right line.".repeat(20);

    c.bench_function("resolve_ascii_1000", |b| {
        b.iter(|| BidiText::new(black_box(&ascii), ResolveOptions::default()));
    });
}

fn resolve_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_mixed");
    for repeat in [1usize, 10, 100] {
        let text = MIXED_LINE.repeat(repeat);
        group.throughput(Throughput::Elements(text.chars().count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| BidiText::new(black_box(text), ResolveOptions::default()));
        });
    }
    group.finish();
}

fn resolve_classes(c: &mut Criterion) {
    let pattern = [
        BidiClass::R,
        BidiClass::WS,
        BidiClass::EN,
        BidiClass::CS,
        BidiClass::EN,
        BidiClass::WS,
        BidiClass::L,
        BidiClass::ON,
    ];
    let classes: Vec<BidiClass> = pattern.iter().copied().cycle().take(4096).collect();

    c.bench_function("resolve_classes_4096", |b| {
        b.iter(|| BidiText::from_classes(black_box(&classes), ResolveOptions::default()));
    });
}

fn deep_nesting(c: &mut Criterion) {
    let mut isolates = "\u{2067}a".repeat(200);
    isolates.push_str(&"\u{2069}".repeat(200));
    let mut brackets = "(\u{05d0}".repeat(100);
    brackets.push_str(&")".repeat(100));

    c.bench_function("resolve_nested_isolates", |b| {
        b.iter(|| BidiText::new(black_box(&isolates), ResolveOptions::default()));
    });
    c.bench_function("resolve_nested_brackets", |b| {
        b.iter(|| BidiText::new(black_box(&brackets), ResolveOptions::default()));
    });
}

fn reorder_lines(c: &mut Criterion) {
    let text = BidiText::new(&MIXED_LINE.repeat(50), ResolveOptions::default());

    c.bench_function("visual_runs_mixed", |b| {
        b.iter(|| {
            let line = text.line(0..text.len()).unwrap();
            black_box(line.visual_runs())
        });
    });
    c.bench_function("reordered_text_mixed", |b| {
        b.iter(|| {
            let line = text.line(0..text.len()).unwrap();
            black_box(line.reordered_text())
        });
    });
}

criterion_group!(
    benches,
    resolve_ltr,
    resolve_mixed,
    resolve_classes,
    deep_nesting,
    reorder_lines
);
criterion_main!(benches);
