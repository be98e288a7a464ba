// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Pipeline throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepwise_core::{GeneratorExt, ListSource, Range, SequenceExt};

fn bench_filter_take(c: &mut Criterion) {
    let items: Vec<u64> = (0..10_000).collect();

    c.bench_function("filter_take_10k", |b| {
        b.iter(|| {
            ListSource::new(black_box(items.clone()))
                .filter(|n| n % 7 == 0)
                .take(500)
                .sum::<u64>()
        })
    });
}

fn bench_range(c: &mut Criterion) {
    c.bench_function("range_default_stride", |b| {
        b.iter(|| Range::new(0, black_box(10_000)).sum::<i64>())
    });

    c.bench_function("range_steered", |b| {
        b.iter(|| {
            Range::steered(0, black_box(10_000))
                .steer(|_| Some(3))
                .map(|n| n * 2)
                .count()
        })
    });
}

criterion_group!(benches, bench_filter_take, bench_range);
criterion_main!(benches);
