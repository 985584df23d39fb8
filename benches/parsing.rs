//! Benchmarks for inline emphasis parsing.

use broadsheet::emphasis::parse_emphasis;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_parse_plain(c: &mut Criterion) {
    let text = "The council met on Tuesday to discuss the new footbridge.";
    c.bench_function("emphasis_plain", |b| {
        b.iter(|| parse_emphasis(black_box(text)))
    });
}

fn bench_parse_marked(c: &mut Criterion) {
    let text = "The **Mill Street footbridge** reopened, *finally*, for ***everyone***. "
        .repeat(40);
    c.bench_function("emphasis_marked_paragraph", |b| {
        b.iter(|| parse_emphasis(black_box(&text)))
    });
}

criterion_group!(benches, bench_parse_plain, bench_parse_marked);
criterion_main!(benches);
