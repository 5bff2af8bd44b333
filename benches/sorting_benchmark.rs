use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use burstsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_sorters(c: &mut Criterion, group_name: &str, input: Vec<String>) {
    let mut group = c.benchmark_group(group_name);
    group.sample_size(10);

    group.bench_function("burstsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| burstsort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("redesigned burstsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| redesigned_burstsort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lazy funnelsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| lazy_funnelsort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("multikey quicksort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| multikey_quicksort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(|| input.clone(), |mut data| data.sort(), BatchSize::SmallInput)
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_random_printable(c: &mut Criterion) {
    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random_range(b' '..=b'~') as char).collect()
        })
        .collect();

    bench_sorters(c, "Random Printable ASCII", input);
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut rng = rand::rng();
    let count = 10_000;
    let prefix = "common_prefix_which_is_quite_long_indeed_";

    let input: Vec<String> = (0..count)
        .map(|_| {
            let suffix: String = (0..5).map(|_| rng.random_range(b'a'..=b'z') as char).collect();
            format!("{}{}", prefix, suffix)
        })
        .collect();

    bench_sorters(c, "Long Common Prefix", input);
}

fn bench_repeated_words(c: &mut Criterion) {
    // A small vocabulary repeated many times: heavy duplication.
    let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"];
    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<String> = (0..count)
        .map(|_| words[rng.random_range(0..words.len())].to_string())
        .collect();

    bench_sorters(c, "Repeated Words", input);
}

fn bench_genome(c: &mut Criterion) {
    // 9-character reads over a 4-letter alphabet.
    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<String> = (0..count)
        .map(|_| (0..9).map(|_| b"ACGT"[rng.random_range(0..4)] as char).collect())
        .collect();

    bench_sorters(c, "Genome 4-Letter", input);
}

criterion_group!(
    benches,
    bench_random_printable,
    bench_long_prefix,
    bench_repeated_words,
    bench_genome
);
criterion_main!(benches);
