use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use k1field::{add, exp, inv, mul, Field, Fp, Polynomial, U256};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_values(rng: &mut StdRng, n: usize) -> Vec<Fp> {
    (0..n).map(|_| Fp::random(&mut *rng)).collect()
}

fn field_arithmetic_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let a = Fp::random(&mut rng).value();
    let b = Fp::random(&mut rng).value();

    let mut group = c.benchmark_group("Field Operations");

    group.bench_function("addition", |bencher| {
        bencher.iter(|| black_box(add(black_box(a), black_box(b))))
    });

    group.bench_function("multiplication", |bencher| {
        bencher.iter(|| black_box(mul(black_box(a), black_box(b))))
    });

    group.bench_function("inversion", |bencher| {
        bencher.iter(|| black_box(inv(black_box(a))))
    });

    group.finish();
}

fn exponentiation_benchmark(c: &mut Criterion) {
    let base = U256::from_u64(7);
    let mut group = c.benchmark_group("Exponentiation");

    // Cost should track exponent bit length
    for bits in [16u32, 64, 128, 256] {
        let exponent = if bits == 256 {
            U256::MAX
        } else {
            U256::from_u128((1u128 << (bits - 1)) | 1)
        };
        group.bench_with_input(BenchmarkId::from_parameter(bits), &exponent, |bencher, e| {
            bencher.iter(|| black_box(exp(base, *e)))
        });
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("Batch Operations");

    for size in [16usize, 256, 1024] {
        let elements = random_values(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("batch_invert", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                let mut copy = elements.clone();
                Fp::batch_invert(&mut copy).ok();
                black_box(copy)
            })
        });

        let poly = Polynomial::new(elements.clone());
        let x = Fp::random(&mut rng);
        group.bench_with_input(BenchmarkId::new("poly_evaluate", size), &poly, |bencher, poly| {
            bencher.iter(|| black_box(poly.evaluate(&x)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    field_arithmetic_benchmark,
    exponentiation_benchmark,
    batch_benchmark
);
criterion_main!(benches);
