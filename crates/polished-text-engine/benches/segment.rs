use criterion::{Criterion, criterion_group, criterion_main};
use polished_text_engine::{SegmentOptions, render, segment, segment_spans};
mod common;

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    let essay = common::generate_annotated_essay(20);
    group.bench_function("essay_spans", |b| {
        b.iter(|| {
            let nodes = segment_spans(std::hint::black_box(&essay), &SegmentOptions::default());
            std::hint::black_box(nodes);
        });
    });

    group.bench_function("essay_to_html", |b| {
        b.iter(|| {
            let html = render::html(&segment(std::hint::black_box(&essay)));
            std::hint::black_box(html);
        });
    });

    let unterminated = common::generate_unterminated_markers(8 * 1024);
    group.bench_function("unterminated_markers", |b| {
        b.iter(|| {
            let segs = segment(std::hint::black_box(&unterminated));
            std::hint::black_box(segs);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
