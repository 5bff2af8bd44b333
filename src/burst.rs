//! The burstsort engine.
//!
//! Four phases: build a burst trie from the input keys, traverse it
//! post-order into the output index array, run multikey quicksort on every
//! bucket at the depth its keys already agree on, and hand the finished
//! permutation back. Trie construction touches mostly the top few levels
//! of the tree, and each leaf sort runs on a working set small enough to
//! stay cache-resident; that locality is the whole point of the algorithm.
//!
//! The parallel variant keeps build and traversal single-threaded (the
//! trie is mutated during build) and dispatches the per-bucket sorts to a
//! worker pool. Buckets map to disjoint output ranges, so the emit order
//! is deterministic no matter how the pool schedules them.

use crate::emit::{self, Segment};
use crate::error::Result;
use crate::key::KeyAccessor;
use crate::pool::WorkerPool;
use crate::trie::BurstTrie;
use crate::tuning::TrieTuning;

/// Performs an index-based burstsort on the provided collection.
///
/// Does not modify the input collection; returns the indices that order it
/// lexicographically by unsigned byte comparison. Not stable: equal keys
/// keep no particular relative order.
///
/// # Examples
///
/// ```
/// use burstsort::burstsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = burstsort(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn burstsort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let (mut out, segments) = build_and_flatten(provider, TrieTuning::default());
    emit::sort_segments(provider, &mut out, &segments);
    out
}

/// Sorts a mutable slice in-place with [`burstsort`].
///
/// # Examples
///
/// ```
/// use burstsort::burstsort_mut;
///
/// let mut data = vec!["banana", "apple", "cherry", "date"];
/// burstsort_mut(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
/// ```
pub fn burstsort_mut<T: AsRef<[u8]>>(data: &mut [T]) {
    let indices = burstsort(data);
    emit::apply_permutation(data, indices);
}

/// [`burstsort`] with the leaf sorts dispatched to a worker pool.
///
/// `pool` defaults to one sized to the available hardware parallelism.
/// Fails with [`SortError::Interrupted`](crate::SortError::Interrupted) if
/// the pool is interrupted mid-sort.
///
/// # Examples
///
/// ```
/// use burstsort::burstsort_parallel;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = burstsort_parallel(&data, None)?;
///
/// assert_eq!(indices, vec![1, 0, 2]);
/// # Ok::<(), burstsort::SortError>(())
/// ```
pub fn burstsort_parallel<T: KeyAccessor + Sync + ?Sized>(
    provider: &T,
    pool: Option<&WorkerPool>,
) -> Result<Vec<usize>> {
    let (mut out, segments) = build_and_flatten(provider, TrieTuning::default());
    emit::sort_segments_pooled(provider, &mut out, &segments, pool)?;
    Ok(out)
}

/// Sorts a mutable slice in-place with [`burstsort_parallel`].
///
/// The slice is left untouched if the pool is interrupted.
pub fn burstsort_parallel_mut<T: AsRef<[u8]> + Sync>(
    data: &mut [T],
    pool: Option<&WorkerPool>,
) -> Result<()> {
    let indices = burstsort_parallel(data, pool)?;
    emit::apply_permutation(data, indices);
    Ok(())
}

/// Build and traversal phases: inserts every key into a fresh trie, then
/// flattens the trie into output order, recording the ranges that still
/// need a leaf sort.
fn build_and_flatten<T: KeyAccessor + ?Sized>(
    provider: &T,
    tuning: TrieTuning,
) -> (Vec<usize>, Vec<Segment>) {
    let len = provider.len();
    let mut trie = BurstTrie::new(tuning);
    for index in 0..len {
        trie.insert(provider, index);
    }

    let mut out = Vec::with_capacity(len);
    let mut segments = Vec::new();
    trie.traverse(|keys, depth| {
        let start = out.len();
        out.extend_from_slice(keys);
        if keys.len() > 1 {
            segments.push(Segment {
                start,
                end: out.len(),
                depth,
            });
        }
    });

    log::debug!(
        "burst trie: {} keys, {} sortable buckets, {} bursts",
        len,
        segments.len(),
        trie.bursts()
    );

    (out, segments)
}
