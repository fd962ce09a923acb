//! Latency benchmarks for the matching primitives
//!
//! RIS should stay logarithmic in collection size; LD is linear but the
//! length pruning should keep it usable on catalog-sized collections.
//!
//! Run with: cargo bench -p devicematch-matchers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use devicematch_matchers::{ld, ris};

/// Synthetic catalog of vendor-model user agents, sorted for RIS.
fn synthetic_collection(size: usize) -> Vec<String> {
    let vendors = [
        "Mozilla/5.0 (Linux; U; Android",
        "Mozilla/5.0 (iPhone; CPU iPhone OS",
        "Nokia",
        "SAMSUNG-SGH-",
        "SonyEricssonK",
        "MOT-",
        "LG-",
        "BlackBerry",
    ];
    let mut agents: Vec<String> = (0..size)
        .map(|i| {
            let vendor = vendors[i % vendors.len()];
            format!("{vendor}{:04}/{}.{}", i, i % 9, i % 7)
        })
        .collect();
    agents.sort();
    agents
}

fn benchmark_ris_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("RIS_Search");
    group.sample_size(100);

    for size in [1_000usize, 10_000, 50_000] {
        let collection = synthetic_collection(size);
        let needle = "Mozilla/5.0 (Linux; U; Android 4.0.3; en-us) Build/IML74K";

        group.bench_with_input(BenchmarkId::new("search", size), &collection, |b, coll| {
            b.iter(|| ris::search(black_box(coll), black_box(needle), 8));
        });
    }

    group.finish();
}

fn benchmark_ld_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("LD_Search");
    group.sample_size(50);

    for size in [1_000usize, 10_000] {
        let collection = synthetic_collection(size);
        let needle = "SAMSUNG-SGH-0042/4.2";

        group.bench_with_input(BenchmarkId::new("search", size), &collection, |b, coll| {
            b.iter(|| ld::search(black_box(coll), black_box(needle), 5));
        });
    }

    group.finish();
}

fn benchmark_ld_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("LD_Distance");
    group.sample_size(200);

    let pairs = [
        ("short", "Nokia6680/1.0", "Nokia6630/1.0"),
        (
            "long",
            "Mozilla/5.0 (Linux; U; Android 2.3.4; en-us; DROID3 Build/5.5.1_84_D3G-55)",
            "Mozilla/5.0 (Linux; U; Android 2.3.6; en-us; DROID3 Build/5.5.1_84_D3G-66)",
        ),
    ];

    for (name, a, b_str) in pairs {
        group.bench_function(BenchmarkId::new("distance", name), |b| {
            b.iter(|| ld::distance(black_box(a), black_box(b_str)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_ris_search,
    benchmark_ld_search,
    benchmark_ld_distance
);
criterion_main!(benches);
