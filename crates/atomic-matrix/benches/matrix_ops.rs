// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the atomic-cell matrix operations.

use atomic_matrix::{multiply, AtomicMatrix};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn fixtures() -> (AtomicMatrix, AtomicMatrix) {
    let a = AtomicMatrix::from([
        [1.0, 2.0, 0.0, 1.0],
        [0.0, 1.0, 1.0, 0.0],
        [1.0, 1.0, 0.0, 2.0],
        [1.0, 0.0, 1.0, 0.0],
    ]);
    let b = AtomicMatrix::from([
        [2.0, 2.0, 0.0, 1.0],
        [1.0, 1.0, 1.0, 2.0],
        [1.0, 1.0, 3.0, 2.0],
        [1.0, 2.0, 1.0, 1.0],
    ]);
    (a, b)
}

fn bench_multiply(c: &mut Criterion) {
    let (a, b) = fixtures();
    c.bench_function("multiply_4x4", |bencher| {
        bencher.iter(|| multiply(black_box(&a), black_box(&b)))
    });
}

fn bench_clone(c: &mut Criterion) {
    let (a, _) = fixtures();
    c.bench_function("clone_4x4", |bencher| bencher.iter(|| black_box(&a).clone()));
}

fn bench_equality(c: &mut Criterion) {
    let (a, _) = fixtures();
    let copy = a.clone();
    c.bench_function("eq_4x4", |bencher| {
        bencher.iter(|| black_box(&a) == black_box(&copy))
    });
}

criterion_group!(benches, bench_multiply, bench_clone, bench_equality);
criterion_main!(benches);
