use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use benches::{random_rigid, random_rotation};
use mathing::prelude::*;

const T: &[Scalar] = &[0.0, 0.5, 1.0];

fn slerp(c: &mut Criterion) {
    let mut rng = rand::rng();
    let (from, to) = (random_rotation(&mut rng), random_rotation(&mut rng));

    let mut group = c.benchmark_group("mathing/quaternion/slerp");
    T.iter().for_each(|&t| {
        group.bench_with_input(BenchmarkId::new("slerp", t), &t, |b, &t| {
            b.iter(|| Quaternion::slerp(black_box(&from), black_box(&to), t))
        });
        group.bench_with_input(BenchmarkId::new("lerp", t), &t, |b, &t| {
            b.iter(|| Quaternion::lerp(black_box(&from), black_box(&to), t))
        });
    });
    group.finish();
}

fn conversion(c: &mut Criterion) {
    let mut rng = rand::rng();
    let m = random_rigid(&mut rng);
    let q = random_rotation(&mut rng);

    let mut group = c.benchmark_group("mathing/quaternion");
    group.bench_function("from_matrix", |b| {
        b.iter(|| Quaternion::from_matrix(black_box(&m)))
    });
    group.bench_function("to_matrix", |b| b.iter(|| Matrix::from(black_box(q))));
    group.bench_function("euler", |b| b.iter(|| black_box(&q).euler()));
    group.bench_function("mul", |b| b.iter(|| black_box(q) * black_box(q)));
    group.finish();
}

criterion_group!(quaternion, slerp, conversion);
criterion_main!(quaternion);
