//! Benchmarks for the alignment strategies.
//!
//! Performance-critical paths:
//! - `diff`: trimming plus the `O(m*n)` LCS matrix on the middle region
//! - `anchored_diff`: unique-value counting and patience selection
//! - rendering: formatting an already computed record stream

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linediff::render::{html, plain};
use linediff::{AnchorMode, anchored_diff, anchored_diff_with, diff};

/// Builds a file of `len` lines where every fourth line repeats.
fn source_lines(len: usize, seed: usize) -> Vec<String> {
    (0..len)
        .map(|i| {
            if i % 4 == 0 {
                "}".to_string()
            } else {
                format!("let value_{} = {};", i, (i * 31 + seed) % 97)
            }
        })
        .collect()
}

/// Returns a copy of `lines` with every `stride`th line rewritten.
fn edited(lines: &[String], stride: usize) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == stride / 2 {
                format!("{line} // edited")
            } else {
                line.clone()
            }
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/strategies");

    for len in [100usize, 500, 2000] {
        let left = source_lines(len, 0);
        let right = edited(&left, 10);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("lcs", len), &len, |b, _| {
            b.iter(|| black_box(diff(black_box(&left), black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("anchored", len), &len, |b, _| {
            b.iter(|| black_box(anchored_diff(black_box(&left), black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("anchored_recursive", len), &len, |b, _| {
            b.iter(|| {
                black_box(anchored_diff_with(
                    black_box(&left),
                    black_box(&right),
                    AnchorMode::Recursive,
                ))
            });
        });
    }

    group.finish();
}

fn bench_trimmed_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/single_edit");

    // One changed line in the middle: trimming keeps the matrix tiny.
    for len in [1000usize, 10_000, 100_000] {
        let left = source_lines(len, 3);
        let mut right = left.clone();
        right[len / 2].push_str(" // edited");

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(diff(black_box(&left), black_box(&right))));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/render");

    let left = source_lines(2000, 5);
    let right = edited(&left, 7);
    let records = diff(&left, &right);

    group.bench_function("plain", |b| {
        b.iter(|| black_box(plain::render(black_box(&records))));
    });
    group.bench_function("html", |b| {
        b.iter(|| black_box(html::render(black_box(&records))));
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_trimmed_edit, bench_render);
criterion_main!(benches);
