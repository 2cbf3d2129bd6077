//! Benchmarks for stream generation and both replacement policies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faultsim::{simulate_fifo, simulate_lru, ReferenceGenerator, SimulationConfig};

const STREAM_LEN: usize = 100_000;
const FRAMES: usize = 50;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_100k", |b| {
        b.iter(|| {
            let mut generator =
                ReferenceGenerator::from_seed(SimulationConfig::default(), 42).unwrap();
            generator.generate(black_box(STREAM_LEN)).unwrap()
        });
    });
}

fn bench_policies(c: &mut Criterion) {
    let mut generator = ReferenceGenerator::from_seed(SimulationConfig::default(), 42).unwrap();
    let stream = generator.generate(STREAM_LEN).unwrap();

    c.bench_function("fifo_100k", |b| {
        b.iter(|| simulate_fifo(black_box(&stream), FRAMES).unwrap());
    });
    c.bench_function("lru_100k", |b| {
        b.iter(|| simulate_lru(black_box(&stream), FRAMES).unwrap());
    });
}

criterion_group!(benches, bench_generate, bench_policies);
criterion_main!(benches);
