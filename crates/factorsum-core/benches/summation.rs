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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use factorsum_core::{divisor::reduce, summer::sum};
use num_bigint::BigUint;
use std::hint::black_box;

const PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    for size in [4usize, 16, 64, 256] {
        let divisors: Vec<u64> = (1..=size as u64).map(|i| i * 3 + 7).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &divisors, |b, d| {
            b.iter(|| reduce(black_box(d.clone())));
        });
    }
    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    let minimum = BigUint::from(1u32);
    let maximum = BigUint::from(10u32).pow(24);
    for size in [2usize, 4, 8, 12] {
        let divisors: Vec<BigUint> = PRIMES[..size].iter().copied().map(BigUint::from).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &divisors, |b, d| {
            b.iter(|| sum(black_box(d), &minimum, &maximum));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reduce, bench_sum);
criterion_main!(benches);
