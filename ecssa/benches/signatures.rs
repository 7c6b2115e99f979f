use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use curve::Point;
use ecssa::{Signature, Ssa};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

fn bench_sign(c: &mut Criterion) {
    let ssa = Ssa::default();
    let mut rng = StdRng::seed_from_u64(42);
    let (prvkey, _) = ssa.keypair(&mut rng).expect("keypair");
    let mhd = Sha256::digest(b"benchmark message");

    c.bench_function("ecssa_sign", |bencher| {
        bencher.iter(|| {
            let sig = ssa.sign(black_box(&mhd), &prvkey, None).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let ssa = Ssa::default();
    let mut rng = StdRng::seed_from_u64(42);
    let (prvkey, pubkey) = ssa.keypair(&mut rng).expect("keypair");
    let mhd = Sha256::digest(b"benchmark message");
    let sig = ssa.sign(&mhd, &prvkey, None).expect("sign");

    c.bench_function("ecssa_verify", |bencher| {
        bencher.iter(|| {
            let ok = ssa.verify(black_box(&mhd), black_box(&pubkey), black_box(&sig));
            black_box(ok);
        })
    });
}

fn bench_batch_verify(c: &mut Criterion) {
    let ssa = Ssa::default();
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("ecssa_batch_verify");
    for size in [2usize, 8, 32] {
        let mut mhds: Vec<Vec<u8>> = Vec::with_capacity(size);
        let mut pubkeys: Vec<Point> = Vec::with_capacity(size);
        let mut sigs: Vec<Signature> = Vec::with_capacity(size);
        for i in 0..size {
            let (prvkey, pubkey) = ssa.keypair(&mut rng).expect("keypair");
            let mhd = Sha256::digest(i.to_be_bytes()).to_vec();
            sigs.push(ssa.sign(&mhd, &prvkey, None).expect("sign"));
            mhds.push(mhd);
            pubkeys.push(pubkey);
        }
        let borrowed: Vec<&[u8]> = mhds.iter().map(|m| m.as_slice()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut coeff_rng = StdRng::seed_from_u64(12345);
                let ok = ssa.batch_verify_with_rng(
                    black_box(&borrowed),
                    black_box(&pubkeys),
                    black_box(&sigs),
                    &mut coeff_rng,
                );
                black_box(ok);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify, bench_batch_verify);
criterion_main!(benches);
