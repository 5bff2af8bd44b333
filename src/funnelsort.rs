//! The lazy funnelsort engine.
//!
//! Cache-oblivious divide and conquer: split the N keys into k = ⌈N^(1/3)⌉
//! contiguous blocks of roughly N^(2/3) keys each, sort every block
//! recursively, then drain a k-merger built over the sorted blocks. Small
//! ranges go straight to insertion sort. The recursion never learns the
//! cache parameters; the k-merger's buffer schedule is what makes the
//! memory traffic come out at Θ((N/B)·log_{M/B}(N/B)) anyway.
//!
//! The threaded variant sorts the top-level blocks on a worker pool and
//! drains the merger on the caller's thread; merging is sequential in this
//! design.

use crate::emit;
use crate::error::Result;
use crate::funnel::KMerger;
use crate::key::KeyAccessor;
use crate::mkq;
use crate::pool::WorkerPool;
use std::ops::Range;

/// Ranges at or below this length are insertion sorted.
const BASE_CASE: usize = 400;

/// Performs an index-based lazy funnelsort on the provided collection.
///
/// Does not modify the input collection; returns the indices that order it
/// lexicographically by unsigned byte comparison.
///
/// # Examples
///
/// ```
/// use burstsort::lazy_funnelsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = lazy_funnelsort(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn lazy_funnelsort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let mut ptrs: Vec<usize> = (0..provider.len()).collect();
    sort_range(provider, &mut ptrs);
    ptrs
}

/// Sorts a mutable slice in-place with [`lazy_funnelsort`].
///
/// # Examples
///
/// ```
/// use burstsort::lazy_funnelsort_mut;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// lazy_funnelsort_mut(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn lazy_funnelsort_mut<T: AsRef<[u8]>>(data: &mut [T]) {
    let indices = lazy_funnelsort(data);
    emit::apply_permutation(data, indices);
}

/// [`lazy_funnelsort`] with the top-level block sorts dispatched to a
/// worker pool; the k-merger drain stays on the caller's thread.
///
/// Fails with [`SortError::Interrupted`](crate::SortError::Interrupted) if
/// the pool is interrupted before every block sort completes.
pub fn lazy_funnelsort_threaded<T: KeyAccessor + Sync + ?Sized>(
    provider: &T,
    pool: Option<&WorkerPool>,
) -> Result<Vec<usize>> {
    let mut ptrs: Vec<usize> = (0..provider.len()).collect();

    if ptrs.len() <= BASE_CASE {
        mkq::insertion_sort(provider, &mut ptrs, 0);
        return Ok(ptrs);
    }

    let block_len = block_length(ptrs.len());
    let jobs: Vec<&mut [usize]> = ptrs.chunks_mut(block_len).collect();
    let run = |block: &mut [usize]| sort_range(provider, block);
    match pool {
        Some(pool) => pool.execute(jobs, run)?,
        None => WorkerPool::default().execute(jobs, run)?,
    }

    merge_blocks(provider, &mut ptrs, block_len);
    Ok(ptrs)
}

/// Sorts a mutable slice in-place with [`lazy_funnelsort_threaded`].
///
/// The slice is left untouched if the pool is interrupted.
pub fn lazy_funnelsort_threaded_mut<T: AsRef<[u8]> + Sync>(
    data: &mut [T],
    pool: Option<&WorkerPool>,
) -> Result<()> {
    let indices = lazy_funnelsort_threaded(data, pool)?;
    emit::apply_permutation(data, indices);
    Ok(())
}

/// Recursive sort of one contiguous range of the index array.
fn sort_range<T: KeyAccessor + ?Sized>(provider: &T, ptrs: &mut [usize]) {
    if ptrs.len() <= BASE_CASE {
        mkq::insertion_sort(provider, ptrs, 0);
        return;
    }

    let block_len = block_length(ptrs.len());
    for block in ptrs.chunks_mut(block_len) {
        sort_range(provider, block);
    }

    merge_blocks(provider, ptrs, block_len);
}

/// Builds a k-merger over the sorted blocks of `ptrs` and drains it,
/// writing the merged order back over `ptrs`.
fn merge_blocks<T: KeyAccessor + ?Sized>(provider: &T, ptrs: &mut [usize], block_len: usize) {
    let len = ptrs.len();
    let runs: Vec<Range<usize>> = (0..len)
        .step_by(block_len)
        .map(|start| start..(start + block_len).min(len))
        .collect();

    log::trace!("funnelsort: merging {} blocks of <= {} keys", runs.len(), block_len);

    let mut merger = KMerger::new(&runs);
    let mut merged = Vec::with_capacity(len);
    merger.drain_into(provider, ptrs, &mut merged);
    ptrs.copy_from_slice(&merged);
}

/// Block length for a range of `len` keys: ⌈len / ⌈len^(1/3)⌉⌉, giving
/// k = ⌈len^(1/3)⌉ blocks of roughly len^(2/3) keys.
fn block_length(len: usize) -> usize {
    let k = (len as f64).cbrt().ceil() as usize;
    len.div_ceil(k.max(2))
}
