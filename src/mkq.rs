//! Multikey quicksort (three-way radix quicksort on strings).
//!
//! Partitions a slice of key references on a single character position,
//! Bentley–Sedgewick style: pick a pivot character by median of three,
//! split into `< pivot | = pivot | > pivot`, recurse on the outer groups at
//! the same depth and on the middle group one character deeper. Keys that
//! have ended at the pivot depth are fully placed and never revisited.
//!
//! This is both a standalone sorter ([`multikey_quicksort`]) and the leaf
//! sort the burstsort engines run on every bucket. Small ranges fall back
//! to a depth-aware insertion sort.

use crate::key::{EOS, KeyAccessor, char_at, tail};
use std::cmp::Ordering;

const INSERTION_SORT_THRESHOLD: usize = 16;

/// Performs an index-based multikey quicksort on the provided collection.
///
/// Does not modify the input collection; returns the indices that order it
/// lexicographically by unsigned byte comparison. Equal keys keep no
/// particular relative order.
///
/// # Examples
///
/// ```
/// use burstsort::multikey_quicksort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = multikey_quicksort(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn multikey_quicksort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let mut ptrs: Vec<usize> = (0..provider.len()).collect();
    sort_at_depth(provider, &mut ptrs, 0);
    ptrs
}

/// Sorts a mutable slice in-place with [`multikey_quicksort`].
///
/// # Examples
///
/// ```
/// use burstsort::multikey_quicksort_mut;
///
/// let mut data = vec!["ab", "abc", "a"];
/// multikey_quicksort_mut(&mut data);
///
/// assert_eq!(data, vec!["a", "ab", "abc"]);
/// ```
pub fn multikey_quicksort_mut<T: AsRef<[u8]>>(data: &mut [T]) {
    let indices = multikey_quicksort(data);
    crate::emit::apply_permutation(data, indices);
}

/// Sorts `ptrs` by the keys they reference, comparing characters from
/// `depth` onward. Callers guarantee all referenced keys agree on the first
/// `depth` bytes.
///
/// Recursion always descends into a group at most half the current size;
/// the largest group is handled by the loop, so stack depth stays
/// logarithmic in the slice length even on adversarial inputs.
pub(crate) fn sort_at_depth<T: KeyAccessor + ?Sized>(
    provider: &T,
    mut ptrs: &mut [usize],
    mut depth: usize,
) {
    loop {
        if ptrs.len() <= INSERTION_SORT_THRESHOLD {
            insertion_sort(provider, ptrs, depth);
            return;
        }

        let (lt, gt, pivot) = partition(provider, ptrs, depth);

        let whole = ptrs;
        let (left, rest) = whole.split_at_mut(lt);
        let (mid, right) = rest.split_at_mut(gt - lt);

        if pivot == EOS {
            // The middle group ended at this depth; fully placed.
            if left.len() >= right.len() {
                sort_at_depth(provider, right, depth);
                ptrs = left;
            } else {
                sort_at_depth(provider, left, depth);
                ptrs = right;
            }
        } else if left.len() >= mid.len() && left.len() >= right.len() {
            sort_at_depth(provider, mid, depth + 1);
            sort_at_depth(provider, right, depth);
            ptrs = left;
        } else if mid.len() >= right.len() {
            sort_at_depth(provider, left, depth);
            sort_at_depth(provider, right, depth);
            ptrs = mid;
            depth += 1;
        } else {
            sort_at_depth(provider, left, depth);
            sort_at_depth(provider, mid, depth + 1);
            ptrs = right;
        }
    }
}

/// Three-way partition of `ptrs` on the character at `depth`.
///
/// Returns `(lt, gt, pivot)` such that `ptrs[..lt]` reads below the pivot
/// character, `ptrs[lt..gt]` equals it, and `ptrs[gt..]` reads above it.
fn partition<T: KeyAccessor + ?Sized>(
    provider: &T,
    ptrs: &mut [usize],
    depth: usize,
) -> (usize, usize, u16) {
    let len = ptrs.len();
    let pivot = median_of_3(
        char_at(provider.get_key(ptrs[0]), depth),
        char_at(provider.get_key(ptrs[len / 2]), depth),
        char_at(provider.get_key(ptrs[len - 1]), depth),
    );

    let mut lt = 0;
    let mut i = 0;
    let mut gt = len;

    while i < gt {
        let c = char_at(provider.get_key(ptrs[i]), depth);
        match c.cmp(&pivot) {
            Ordering::Less => {
                ptrs.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                ptrs.swap(i, gt);
            }
            Ordering::Equal => {
                i += 1;
            }
        }
    }

    (lt, gt, pivot)
}

#[inline(always)]
fn median_of_3(a: u16, b: u16, c: u16) -> u16 {
    a.min(b).max(a.max(b).min(c))
}

/// Insertion sort of `ptrs` comparing key suffixes from `depth` onward.
///
/// Byte-slice comparison of the suffixes already orders shorter prefixes
/// before their extensions, so no explicit length tiebreak is needed.
pub(crate) fn insertion_sort<T: KeyAccessor + ?Sized>(
    provider: &T,
    ptrs: &mut [usize],
    depth: usize,
) {
    for i in 1..ptrs.len() {
        let mut j = i;
        while j > 0 {
            let prev = tail(provider.get_key(ptrs[j - 1]), depth);
            let cur = tail(provider.get_key(ptrs[j]), depth);
            if cur >= prev {
                break;
            }
            ptrs.swap(j, j - 1);
            j -= 1;
        }
    }
}
