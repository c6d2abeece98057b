//! Benchmarks for polynomial arithmetic and factorization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use surd::factor::factor;
use surd::poly::{resultant, DensePoly, SturmSequence};
use surd::integers::Rational;
use surd::rings::Q;

/// Generates a polynomial with small pseudo-random coefficients.
fn sample_poly_q(degree: usize) -> DensePoly<Q> {
    let coeffs: Vec<Q> = (0..=degree)
        .map(|i| Q::from((i as i64 * 37 % 100) - 50))
        .collect();
    DensePoly::new(coeffs)
}

/// The product of `x - r` over the given roots.
fn from_roots(roots: &[i64]) -> DensePoly<Q> {
    roots.iter().fold(DensePoly::one(), |acc, &r| {
        acc.mul(&DensePoly::new(vec![Q::from(-r), Q::from(1)]))
    })
}

fn bench_resultant(c: &mut Criterion) {
    let mut group = c.benchmark_group("resultant");

    for size in [4, 8, 16, 32] {
        let p = sample_poly_q(size);
        let q = sample_poly_q(size - 1).derivative();

        group.bench_with_input(BenchmarkId::new("DensePoly<Q>", size), &size, |b, _| {
            b.iter(|| black_box(resultant(&p, &q)))
        });
    }

    group.finish();
}

fn bench_sturm(c: &mut Criterion) {
    let mut group = c.benchmark_group("sturm");

    let p = from_roots(&[-7, -3, -1, 0, 2, 5, 11]);
    let lower = Rational::from(-20);
    let upper = Rational::from(20);

    group.bench_function("sequence_degree_7", |b| {
        b.iter(|| black_box(SturmSequence::new(&p)))
    });

    let sturm = SturmSequence::new(&p).unwrap();
    group.bench_function("count_degree_7", |b| {
        b.iter(|| black_box(sturm.count_roots(&lower, &upper)))
    });

    group.finish();
}

fn bench_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor");
    group.sample_size(20);

    // x^6 - 1
    let cyclotomic = DensePoly::new(vec![
        Q::from(-1),
        Q::from(0),
        Q::from(0),
        Q::from(0),
        Q::from(0),
        Q::from(0),
        Q::from(1),
    ]);
    // irreducible, but splits into linear factors modulo many primes
    let swinnerton_dyer = DensePoly::new(vec![
        Q::from(1),
        Q::from(0),
        Q::from(-10),
        Q::from(0),
        Q::from(1),
    ]);
    let linear = from_roots(&[-4, -2, 1, 3, 6, 9]);

    group.bench_function("x6_minus_1", |b| b.iter(|| black_box(factor(&cyclotomic))));
    group.bench_function("swinnerton_dyer_4", |b| {
        b.iter(|| black_box(factor(&swinnerton_dyer)))
    });
    group.bench_function("six_linear", |b| b.iter(|| black_box(factor(&linear))));

    group.finish();
}

criterion_group!(benches, bench_resultant, bench_sturm, bench_factor);

criterion_main!(benches);
