use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{JacPoint, SECP256K1};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_jacobian_double(c: &mut Criterion) {
    let ec = &*SECP256K1;
    let g = ec.generator_jac();
    c.bench_function("jacobian_double", |bencher| {
        bencher.iter(|| black_box(ec.jac_double(black_box(g))))
    });
}

fn bench_jacobian_add(c: &mut Criterion) {
    let ec = &*SECP256K1;
    let g = ec.generator_jac();
    let h = ec.jac_double(g);
    c.bench_function("jacobian_add", |bencher| {
        bencher.iter(|| black_box(ec.jac_add(black_box(g), black_box(&h))))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let ec = &*SECP256K1;
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = ec.random_scalar(&mut rng);

    c.bench_function("scalar_mul", |bencher| {
        bencher.iter(|| black_box(ec.scalar_mul(black_box(&scalar), ec.generator_jac())))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let ec = &*SECP256K1;
    let mut rng = StdRng::seed_from_u64(42);
    let u = ec.random_scalar(&mut rng);
    let v = ec.random_scalar(&mut rng);
    let h = ec.scalar_mul(&ec.random_scalar(&mut rng), ec.generator_jac());

    c.bench_function("double_scalar_mul", |bencher| {
        bencher.iter(|| {
            black_box(ec.double_scalar_mul(
                black_box(&u),
                black_box(&h),
                black_box(&v),
                ec.generator_jac(),
            ))
        })
    });
}

fn bench_multi_scalar_mul(c: &mut Criterion) {
    let ec = &*SECP256K1;
    let mut group = c.benchmark_group("multi_scalar_mul");

    for size in [2, 4, 8, 16, 32, 64].iter() {
        let mut rng = StdRng::seed_from_u64(12345);

        let points: Vec<JacPoint> = (0..*size)
            .map(|_| ec.scalar_mul(&ec.random_scalar(&mut rng), ec.generator_jac()))
            .collect();
        let scalars: Vec<_> = (0..*size).map(|_| ec.random_scalar(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(ec.multi_scalar_mul(black_box(&scalars), black_box(&points))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_jacobian_double,
    bench_jacobian_add,
    bench_scalar_mul,
    bench_double_scalar_mul,
    bench_multi_scalar_mul
);
criterion_main!(benches);
