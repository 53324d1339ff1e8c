use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;

use benches::random_rigid;
use mathing::prelude::*;

const CHAIN_LENGTHS: &[usize] = &[1, 16, 256];

fn mul(c: &mut Criterion) {
    let mut rng = rand::rng();
    let (a, b) = (random_rigid(&mut rng), random_rigid(&mut rng));

    let mut group = c.benchmark_group("mathing/matrix");
    group.bench_function("mul", |bench| bench.iter(|| black_box(&a) * black_box(&b)));
    group.bench_function("mul_assign", |bench| {
        bench.iter(|| {
            let mut m = black_box(a);
            m *= black_box(&b);
            m
        })
    });
    group.finish();
}

fn chain(c: &mut Criterion) {
    let mut rng = rand::rng();
    let mut group = c.benchmark_group("mathing/matrix/chain");

    CHAIN_LENGTHS.iter().for_each(|&len| {
        let bones = (0..len).map(|_| random_rigid(&mut rng)).collect_vec();
        group.bench_with_input(BenchmarkId::new("premul_assign", len), &bones, |b, bones| {
            b.iter(|| {
                bones.iter().fold(Matrix::IDENTITY, |mut world, local| {
                    world.premul_assign(black_box(local));
                    world
                })
            })
        });
    });
    group.finish();
}

fn transform(c: &mut Criterion) {
    let mut rng = rand::rng();
    let m = random_rigid(&mut rng);
    let p = Vec4::point(1., 2., 3.);

    let mut group = c.benchmark_group("mathing/matrix");
    group.bench_function("transform", |b| {
        b.iter(|| black_box(&m).transform(black_box(&p)))
    });
    group.bench_function("rotate", |b| b.iter(|| black_box(&m).rotate(black_box(&p))));
    group.bench_function("vec_mul", |b| b.iter(|| black_box(p) * black_box(&m)));
    group.finish();
}

fn inverse(c: &mut Criterion) {
    let mut rng = rand::rng();
    let m = random_rigid(&mut rng);

    let mut group = c.benchmark_group("mathing/matrix");
    group.bench_function("inverse", |b| b.iter(|| black_box(&m).inverse()));
    group.bench_function("transpose", |b| b.iter(|| black_box(&m).transpose()));
    group.bench_function("flip_z", |b| b.iter(|| black_box(&m).flip_z()));
    group.finish();
}

criterion_group!(matrix, mul, chain, transform, inverse);
criterion_main!(matrix);
