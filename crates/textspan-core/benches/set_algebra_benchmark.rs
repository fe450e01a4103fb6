// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use textspan_core::{Interval, IntervalSet};

/// Deterministic, overlapping and unsorted input of `n` intervals.
fn scattered(n: usize, seed: u64) -> IntervalSet<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = n as i64 * 8;
    (0..n)
        .map(|_| {
            let start = rng.random_range(0..span);
            let len = rng.random_range(0..16);
            Interval::new(start, start + len)
        })
        .collect()
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    for &n in &[64usize, 1024, 4096] {
        let a = scattered(n, 42);
        let b = scattered(n / 2 + 1, 7);
        let base = Interval::new(0, n as i64 * 8);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("normalize", n), &a, |bench, a| {
            bench.iter(|| black_box(a).normalize())
        });
        group.bench_with_input(BenchmarkId::new("union", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a).union(black_box(*b)))
        });
        group.bench_with_input(BenchmarkId::new("complement", n), &a, |bench, a| {
            bench.iter(|| black_box(a).complement(black_box(base)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_algebra);
criterion_main!(benches);
