use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use burstsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Strings");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Large sort setup overhead

    let mut rng = rand::rng();
    let count = 1_000_000;

    // ~16MB of string data (avg length 16)
    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(8..24);
            (0..len).map(|_| rng.random_range(b' '..=b'~') as char).collect()
        })
        .collect();

    let total_bytes: usize = random_strings.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("burstsort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| burstsort_mut(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("burstsort (parallel)", |b| {
        let pool = WorkerPool::default();
        b.iter_batched(
            || random_strings.clone(),
            |mut data| burstsort_parallel_mut(black_box(&mut data), Some(&pool)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("redesigned burstsort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| redesigned_burstsort_mut(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("lazy funnelsort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| lazy_funnelsort_mut(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("lazy funnelsort (threaded)", |b| {
        let pool = WorkerPool::default();
        b.iter_batched(
            || random_strings.clone(),
            |mut data| lazy_funnelsort_threaded_mut(black_box(&mut data), Some(&pool)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_strings);
criterion_main!(benches);
