//! Benchmarks to measure the compute overhead of `time_marks` logic itself.
//!
//! Every measured mark is empty, so what remains is the cost of reading the clock and
//! updating the registry.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use time_marks::{ClockKind, DiscardSink, ManualClock, MarkRegistry};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_marks_overhead");

    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    {
        let mut registry = MarkRegistry::builder()
            .clock(ManualClock::new())
            .diagnostics(DiscardSink)
            .build();

        group.bench_function("begin_end_manual_clock", |b| {
            b.iter(|| {
                registry.begin(black_box("empty"));
                black_box(registry.end(black_box("empty")));
            });
        });
    }

    {
        let mut registry = MarkRegistry::builder()
            .clock_kind(ClockKind::Precise)
            .diagnostics(DiscardSink)
            .build();

        group.bench_function("begin_end_precise_clock", |b| {
            b.iter(|| {
                registry.begin(black_box("empty"));
                black_box(registry.end(black_box("empty")));
            });
        });

        group.bench_function("guard_precise_clock", |b| {
            b.iter(|| {
                let _mark = registry.mark(black_box("empty"));
            });
        });
    }

    {
        let mut registry = MarkRegistry::builder()
            .clock_kind(ClockKind::Coarse)
            .diagnostics(DiscardSink)
            .build();

        group.bench_function("begin_end_coarse_clock", |b| {
            b.iter(|| {
                registry.begin(black_box("empty"));
                black_box(registry.end(black_box("empty")));
            });
        });
    }

    {
        let mut registry = MarkRegistry::builder()
            .clock(ManualClock::new())
            .diagnostics(DiscardSink)
            .build();

        group.bench_function("unmatched_end", |b| {
            b.iter(|| {
                black_box(registry.end(black_box("never_begun")));
            });
        });
    }

    group.finish();
}
