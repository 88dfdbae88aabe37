//! # m3u-sync Performance Benchmarks
//!
//! Benchmarks for the hot paths of a reconciliation run: the segment
//! comparator, full ordering of an entry set, and artifact serialization.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run a specific benchmark group
//! cargo bench ordering
//! cargo bench serialization
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use tempfile::TempDir;

use m3u_sync::{ordering, playlist};

/// Synthetic but realistically shaped relative paths: 20 artists, a
/// handful of albums each, tracks alternating between mp3 and flac.
fn create_test_entries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let artist = i % 20;
            let album = (i / 20) % 5;
            let ext = if i % 2 == 0 { "mp3" } else { "flac" };
            format!("Artist {artist:02}/Album {album}/Track {i:04}.{ext}")
        })
        .collect()
}

/// Benchmark the segment comparator on representative path pairs
fn benchmark_comparator(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_comparator");

    let pairs = [
        ("shared_prefix", "Artist/Album/Track 0001.mp3", "Artist/Album/Track 0002.mp3"),
        ("case_only", "artist/album/track.mp3", "Artist/Album/Track.mp3"),
        ("depth_tie", "Artist/Album", "Artist/Album/Track.mp3"),
        ("early_decision", "Aardvark/x.mp3", "Zebra/x.mp3"),
    ];

    for (name, left, right) in pairs {
        group.bench_function(name, |b| {
            b.iter(|| ordering::compare_paths(black_box(left), black_box(right)))
        });
    }

    group.finish();
}

/// Benchmark full ordering of entry sets of increasing size
fn benchmark_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_materialization");

    for size in [100, 1_000, 10_000] {
        let entries: HashSet<String> = create_test_entries(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("into_ordered", size), &entries, |b, entries| {
            b.iter_batched(
                || entries.clone(),
                |entries| black_box(ordering::into_ordered(entries)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark playlist artifact serialization
fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("artifact_serialization");

    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("bench.m3u");

    for size in [100, 1_000, 10_000] {
        let entries: HashSet<String> = create_test_entries(size).into_iter().collect();
        let ordered = ordering::into_ordered(entries);

        group.bench_with_input(BenchmarkId::new("write_playlist", size), &ordered, |b, ordered| {
            b.iter(|| playlist::write_playlist(black_box(&path), black_box(ordered)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_comparator,
    benchmark_ordering,
    benchmark_serialization
);

criterion_main!(benches);
