//! Performance benchmarks for decomposition and canonicalization.
//!
//! Run with: `cargo bench --bench canonical`
//!
//! ## Cost Model
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | Crossing components | O(c²) | c = chord count |
//! | Encode | O(c) | direct slot indexing |
//! | Canonical identifier | O(n · c log c) | 2n re-bucketings + encodings |
//! | Cached canonical identifier | O(c) | encode + LRU lookup |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pancyclic::{Chord, Hamiltonian, IsoNumCache};

/// Perfect matching of short crossing pairs: (0,2),(1,3),(4,6),(5,7),...
fn crossing_pairs(num_vertices: usize) -> Hamiltonian {
    let n = num_vertices;
    let chords = (0..n / 4).flat_map(|block| {
        let base = (block * 4) as i64;
        [Chord::new(base, base + 2, n), Chord::new(base + 1, base + 3, n)]
    });
    Hamiltonian::from_chords(n, chords).expect("valid chords")
}

/// Diameters plus near-diameters, everything crossing everything.
fn dense_crossing(num_vertices: usize) -> Hamiltonian {
    let n = num_vertices;
    let half = (n / 2) as i64;
    let chords = (0..half).map(|s| Chord::new(s, s + half, n));
    Hamiltonian::from_chords(n, chords).expect("valid chords")
}

fn bench_crossing_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing_components");

    for n in [18, 64, 256] {
        for (name, diagram) in [("pairs", crossing_pairs(n)), ("dense", dense_crossing(n))] {
            group.throughput(Throughput::Elements(diagram.num_chords() as u64));
            group.bench_with_input(BenchmarkId::new(name, n), &diagram, |b, d| {
                b.iter(|| black_box(d).crossing_components())
            });
        }
    }

    group.finish();
}

fn bench_graph_num(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_num");

    for n in [18, 64, 256] {
        let diagram = crossing_pairs(n);
        group.bench_with_input(BenchmarkId::new("encode", n), &diagram, |b, d| {
            b.iter(|| black_box(d).graph_num())
        });

        let num = diagram.graph_num();
        group.bench_with_input(BenchmarkId::new("decode", n), &num, |b, num| {
            b.iter(|| Hamiltonian::from_graph_num(n, black_box(num)).expect("valid identifier"))
        });
    }

    group.finish();
}

fn bench_graph_iso_num(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_iso_num");

    for n in [18, 64, 128] {
        let diagram = crossing_pairs(n);
        group.bench_with_input(BenchmarkId::new("search", n), &diagram, |b, d| {
            b.iter(|| black_box(d).graph_iso_num())
        });

        let cache = IsoNumCache::default();
        cache.canonical(&diagram);
        group.bench_with_input(BenchmarkId::new("cached", n), &diagram, |b, d| {
            b.iter(|| cache.canonical(black_box(d)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_crossing_components,
    bench_graph_num,
    bench_graph_iso_num,
);
criterion_main!(benches);
