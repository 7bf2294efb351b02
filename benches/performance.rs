// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for the handing pipeline
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chord grouping of unsorted notes
//! - Segment splitting
//! - Feed-forward propagation over one long segment
//! - The full pipeline including chart JSON output

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use handing::handing::{colored_notes, split_segments, FeedForward};
use handing::model::build_chords;
use handing::{assign_handing, chart, HandingConfig, Millis, Note, Tile};

const SIZES: [usize; 3] = [100, 1000, 10000];

/// Stream-heavy chart with occasional chords, holds and rests
fn random_chart(size: usize) -> Vec<Note> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut notes = Vec::with_capacity(size);
    let mut time: Millis = 0;
    while notes.len() < size {
        time += if rng.gen_bool(0.05) {
            rng.gen_range(400..1500)
        } else {
            rng.gen_range(40..300)
        };
        let tile = Tile::ALL[rng.gen_range(0..Tile::COUNT)];
        if rng.gen_bool(0.1) {
            notes.push(Note::hold(tile, time, rng.gen_range(100..500)));
        } else {
            notes.push(Note::beat(tile, time));
        }
        if rng.gen_bool(0.15) {
            let other = Tile::ALL[(tile.index() + rng.gen_range(1..Tile::COUNT)) % Tile::COUNT];
            notes.push(Note::beat(other, time));
        }
    }
    notes
}

/// Same chart with no rests, so everything lands in one segment
fn dense_chart(size: usize) -> Vec<Note> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..size)
        .map(|i| Note::beat(Tile::ALL[rng.gen_range(0..Tile::COUNT)], i as Millis * 120))
        .collect()
}

fn bench_build_chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chords");

    for size in SIZES.iter() {
        let mut notes = random_chart(*size);
        notes.reverse();
        group.bench_with_input(BenchmarkId::from_parameter(size), &notes, |b, notes| {
            b.iter_batched(
                || notes.clone(),
                |notes| black_box(build_chords(notes).map(|c| c.len())),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_split_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_segments");

    for size in SIZES.iter() {
        let chords = build_chords(random_chart(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &chords, |b, chords| {
            b.iter(|| black_box(split_segments(chords, 350).len()))
        });
    }

    group.finish();
}

fn bench_feed_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_forward");
    let config = HandingConfig::default();

    for size in SIZES.iter() {
        let chords = build_chords(dense_chart(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("run", size), &chords, |b, chords| {
            b.iter(|| {
                let (fchords, _) = FeedForward::new(chords, &config).run().unwrap();
                black_box(fchords.len())
            })
        });

        // Walking back and forth exercises the snapshot history
        group.bench_with_input(BenchmarkId::new("step_back", size), &chords, |b, chords| {
            b.iter(|| {
                let mut ff = FeedForward::new(chords, &config);
                for _ in 0..chords.len() {
                    ff.next_chord().unwrap();
                    ff.next_chord().unwrap();
                    ff.prev_chord().unwrap();
                }
                black_box(ff.cursor())
            })
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = HandingConfig::default();

    for size in SIZES.iter() {
        let notes = random_chart(*size);
        group.bench_with_input(BenchmarkId::new("assign", size), &notes, |b, notes| {
            b.iter_batched(
                || notes.clone(),
                |notes| black_box(assign_handing(notes, &config).map(|p| p.stats)),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("to_json", size), &notes, |b, notes| {
            b.iter_batched(
                || notes.clone(),
                |notes| {
                    let parsed = assign_handing(notes, &config).unwrap();
                    black_box(chart::chart_to_json(&colored_notes(parsed.map)).map(|s| s.len()))
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_chords,
    bench_split_segments,
    bench_feed_forward,
    bench_full_pipeline,
);

criterion_main!(benches);
