// Benchmarks for prime-curve point arithmetic over the num-bigint backend

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pcrypt_algorithms::bignum::NumBignumAlgorithm;
use pcrypt_algorithms::ec::{Curve, EccAlgorithm, PrimeCurveAlgorithm};
use pcrypt_api::{BigNum, BignumAlgorithm, InitParams, ParamValue};
use rand::{rngs::OsRng, RngCore};

fn load(name: &str) -> Curve {
    let params = InitParams::new().with("bignum", ParamValue::Bignum(NumBignumAlgorithm.zero()));
    let mut curve = PrimeCurveAlgorithm.new_curve(&params).unwrap();
    curve.load_named(name).unwrap();
    curve
}

/// Generate a random scalar of `len` bytes
fn random_scalar(len: usize) -> BigNum {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    NumBignumAlgorithm.from_bytes(&bytes)
}

fn bench_group_law(c: &mut Criterion) {
    let curve = load("secp256r1");
    let g = curve.generator();
    let g2 = g.double().unwrap();

    let mut group = c.benchmark_group("secp256r1-point");
    group.bench_function("add", |b| b.iter(|| black_box(g.add(&g2).unwrap())));
    group.bench_function("double", |b| b.iter(|| black_box(g.double().unwrap())));
    group.finish();
}

fn bench_scalar_mul(c: &mut Criterion) {
    for (name, len) in [("secp256r1", 32), ("secp384r1", 48), ("secp521r1", 66)] {
        let curve = load(name);
        let g = curve.generator();
        let q = g.mul(&random_scalar(len)).unwrap();

        let mut group = c.benchmark_group(name);
        group.sample_size(10);

        group.bench_function("mul", |b| {
            b.iter_batched(
                || random_scalar(len),
                |k| black_box(g.mul(&k).unwrap()),
                BatchSize::SmallInput,
            )
        });

        group.bench_function("mul2", |b| {
            b.iter_batched(
                || (random_scalar(len), random_scalar(len)),
                |(k1, k2)| black_box(g.mul2(&k1, Some((&q, &k2))).unwrap()),
                BatchSize::SmallInput,
            )
        });

        group.finish();
    }
}

criterion_group!(benches, bench_group_law, bench_scalar_mul);
criterion_main!(benches);
