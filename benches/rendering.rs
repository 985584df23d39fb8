//! Benchmarks for edition layout.

use broadsheet::edition::{Edition, EditionView, LayoutOptions};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn options(width: u16) -> LayoutOptions {
    LayoutOptions {
        width,
        region_label: "Region 12".to_string(),
        date: "2026-10-18".to_string(),
    }
}

fn bench_build(c: &mut Criterion) {
    let edition = Edition::from_json(include_str!("../tests/fixtures/edition.json")).unwrap();
    c.bench_function("edition_build", |b| {
        b.iter(|| EditionView::build(black_box(edition.clone()), options(80)))
    });
}

fn bench_relayout(c: &mut Criterion) {
    let edition = Edition::from_json(include_str!("../tests/fixtures/edition.json")).unwrap();
    let mut view = EditionView::build(edition, options(80));
    let mut width = 80;
    c.bench_function("edition_relayout", |b| {
        b.iter(|| {
            width = if width == 80 { 60 } else { 80 };
            view.relayout(black_box(width));
        })
    });
}

criterion_group!(benches, bench_build, bench_relayout);
criterion_main!(benches);
