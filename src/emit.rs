//! Output emission shared by the sorting engines.
//!
//! The burstsort engines flatten their trie into the output index array in
//! traversal order and remember which ranges still need a leaf sort. Those
//! ranges are [`Segment`]s; sorting them serially or on a pool is the same
//! operation either way because the segments never overlap.

use crate::error::Result;
use crate::key::KeyAccessor;
use crate::mkq;
use crate::pool::WorkerPool;

/// A range of the output array holding one bucket's keys, all agreeing on
/// their first `depth` bytes.
pub(crate) struct Segment {
    pub start: usize,
    pub end: usize,
    pub depth: usize,
}

/// Sorts every segment in place with multikey quicksort at its depth.
pub(crate) fn sort_segments<T: KeyAccessor + ?Sized>(
    provider: &T,
    out: &mut [usize],
    segments: &[Segment],
) {
    for seg in segments {
        mkq::sort_at_depth(provider, &mut out[seg.start..seg.end], seg.depth);
    }
}

/// Sorts the segments concurrently as independent units of work.
///
/// Each unit owns a disjoint `&mut` slice of the output array, so no
/// synchronization beyond the pool's queue is needed and the result is
/// identical to the serial pass regardless of completion order.
pub(crate) fn sort_segments_pooled<T: KeyAccessor + Sync + ?Sized>(
    provider: &T,
    out: &mut [usize],
    segments: &[Segment],
    pool: Option<&WorkerPool>,
) -> Result<()> {
    let mut jobs: Vec<(&mut [usize], usize)> = Vec::with_capacity(segments.len());
    let mut rest = out;
    let mut consumed = 0;

    for seg in segments {
        let whole = rest;
        let (_, tail) = whole.split_at_mut(seg.start - consumed);
        let (slice, tail) = tail.split_at_mut(seg.end - seg.start);
        jobs.push((slice, seg.depth));
        rest = tail;
        consumed = seg.end;
    }

    let run = |(slice, depth): (&mut [usize], usize)| mkq::sort_at_depth(provider, slice, depth);
    match pool {
        Some(pool) => pool.execute(jobs, run),
        None => WorkerPool::default().execute(jobs, run),
    }
}

/// Applies a sorted-index permutation to `data` in-place by walking its
/// cycles, consuming the index vector as the visited marker.
pub(crate) fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
