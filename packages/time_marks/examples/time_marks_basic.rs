//! Demonstrates the key `time_marks` types working together.
//!
//! Diagnostics are logged via `tracing`; this example installs a subscriber that prints them.
//!
//! Run with: `cargo run --example time_marks_basic`.

use std::collections::BTreeMap;
use std::hint::black_box;

use time_marks::MarkRegistry;

fn main() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Announces the selected clock at INFO level.
    let mut registry = MarkRegistry::new();

    for size in [1_000_u64, 10_000, 100_000] {
        registry.begin("sum");
        black_box((0..size).sum::<u64>());
        registry.end("sum");
    }

    for size in [100_usize, 1_000, 10_000] {
        let _mark = registry.mark("collect_map");
        let map = (0..size).map(|i| (i, i.to_string())).collect::<BTreeMap<_, _>>();
        black_box(map);
    }

    // Misuse is reported at WARN level and otherwise ignored.
    registry.begin("sum");
    registry.begin("sum");
    registry.end("sum");
    registry.end("sum");
    registry.end("typo");

    println!();
    println!("Pending marks: {:?}", registry.pending());
    println!();

    registry.dump(None, false);

    if let Some(stats) = registry.timing_data("sum") {
        println!();
        println!(
            "'sum' ran {} times, between {:.3}ms and {:.3}ms",
            stats.tally, stats.min, stats.max
        );
    }

    registry.clear_all();
    assert!(registry.is_empty());
}
