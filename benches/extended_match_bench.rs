// benches/extended_match_bench.rs
//
// The raw RFC 4647 predicate over tag/range pairs of increasing subtag
// depth, including the skip-heavy worst case.
//
// Run with `cargo bench --bench emb`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use taggy::extended_match;

const PAIRS: &[(&str, &str, &str)] = &[
    ("exact", "en", "en"),
    ("prefix", "en-GB", "en"),
    ("wildcard", "zh-Hans-CN", "*"),
    ("interior_wildcard", "de-Latn-DE", "de-*-DE"),
    ("skip_heavy", "de-Latn-DE-1996-x-abc", "de-DE"),
    ("mismatch", "fr-FR", "en-GB"),
];

fn bench_extended_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("extended_match");

    for &(label, tag, range) in PAIRS {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| black_box(extended_match(black_box(tag), black_box(range))))
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(1))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(200)
        .noise_threshold(0.02);
    targets = bench_extended_match
);
criterion_main!(benches);
