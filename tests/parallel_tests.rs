//! Parallel variants: equivalence with the serial engines, pool behavior,
//! interruption.

use burstsort::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_keys(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..max_len);
            let mut row = vec![0u8; len];
            rng.fill(&mut row[..]);
            row
        })
        .collect()
}

#[test]
fn test_parallel_matches_serial_burstsort() {
    let mut rng = StdRng::seed_from_u64(31);
    let input = random_keys(&mut rng, 50_000, 24);

    let serial = burstsort(&input);
    let parallel = burstsort_parallel(&input, None).unwrap();

    // Bit-exact: the parallel engine runs the same per-bucket sorts over
    // the same disjoint output ranges.
    assert_eq!(serial, parallel);
}

#[test]
fn test_parallel_matches_serial_redesigned() {
    let mut rng = StdRng::seed_from_u64(32);
    let input = random_keys(&mut rng, 50_000, 24);

    let serial = redesigned_burstsort(&input);
    let parallel = redesigned_burstsort_parallel(&input, None).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn test_threaded_matches_serial_funnelsort() {
    let mut rng = StdRng::seed_from_u64(33);
    let input = random_keys(&mut rng, 30_000, 16);

    let serial = lazy_funnelsort(&input);
    let threaded = lazy_funnelsort_threaded(&input, None).unwrap();
    assert_eq!(serial, threaded);
}

#[test]
fn test_explicit_pool_sizes() {
    let mut rng = StdRng::seed_from_u64(34);
    let input = random_keys(&mut rng, 10_000, 16);

    let mut expected = input.clone();
    expected.sort();

    for workers in [1, 2, 8] {
        let pool = WorkerPool::new(workers);
        assert_eq!(pool.workers(), workers);

        let mut data = input.clone();
        burstsort_parallel_mut(&mut data, Some(&pool)).unwrap();
        assert_eq!(data, expected);

        let mut data = input.clone();
        lazy_funnelsort_threaded_mut(&mut data, Some(&pool)).unwrap();
        assert_eq!(data, expected);
    }
}

#[test]
fn test_interrupted_pool_fails() {
    let mut rng = StdRng::seed_from_u64(35);
    let input = random_keys(&mut rng, 10_000, 16);

    let pool = WorkerPool::new(2);
    pool.interrupt();
    assert!(pool.is_interrupted());

    let err = burstsort_parallel(&input, Some(&pool)).unwrap_err();
    assert!(matches!(err, SortError::Interrupted));

    let err = lazy_funnelsort_threaded(&input, Some(&pool)).unwrap_err();
    assert!(matches!(err, SortError::Interrupted));

    // The in-place variants leave the data untouched on failure.
    let mut data = input.clone();
    redesigned_burstsort_parallel_mut(&mut data, Some(&pool)).unwrap_err();
    assert_eq!(data, input);
}

#[test]
fn test_pool_runs_plain_tasks() {
    let pool = WorkerPool::new(4);
    let mut chunks: Vec<Vec<u32>> = (0..64).map(|i| vec![i; 100]).collect();

    pool.execute(chunks.iter_mut().collect(), |chunk: &mut Vec<u32>| {
        chunk.iter_mut().for_each(|v| *v += 1);
    })
    .unwrap();

    for (i, chunk) in chunks.iter().enumerate() {
        assert!(chunk.iter().all(|&v| v == i as u32 + 1));
    }
}
