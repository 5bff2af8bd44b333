//! The redesigned burstsort engine.
//!
//! Same trie shape as [`crate::trie`], with two changes that earn the
//! name:
//!
//! - Buckets store `(index, remaining-suffix)` pairs instead of bare
//!   indices. The suffix cursor advances one byte per trie level, so a
//!   burst redistributes by reading the first byte of each stored tail and
//!   never rescans a prefix or re-fetches a key from the provider.
//! - The fanout is folded to the 128 ASCII slots. Bytes outside that range
//!   land in a per-node overflow bucket that is never burst; since every
//!   byte `>= 128` orders after every byte `< 128`, emitting the overflow
//!   bucket after slot 127 and multikey-quicksorting it at the node's
//!   depth keeps the global order exact. ASCII-dominated data gets half
//!   the node footprint; arbitrary bytes stay correct.

use crate::emit::{self, Segment};
use crate::error::Result;
use crate::key::KeyAccessor;
use crate::pool::WorkerPool;
use crate::tuning::TrieTuning;
use std::mem;

/// Folded fanout of an internal node: one slot per ASCII byte.
const REDUCED_ALPHABET: usize = 128;

/// A key reference plus its unconsumed suffix.
struct Tail<'k> {
    index: usize,
    rest: &'k [u8],
}

enum Slot<'k> {
    Empty,
    Bucket(Bucket<'k>),
    Node(Box<Node<'k>>),
}

#[derive(Default)]
struct Bucket<'k> {
    entries: Vec<Tail<'k>>,
}

impl<'k> Bucket<'k> {
    fn with_first(entry: Tail<'k>, tuning: TrieTuning) -> Self {
        let mut entries = Vec::with_capacity(tuning.initial_bucket_capacity);
        entries.push(entry);
        Self { entries }
    }

    fn push(&mut self, entry: Tail<'k>, tuning: TrieTuning) {
        if self.entries.len() == self.entries.capacity() {
            let grown = self.entries.capacity().max(1) * tuning.bucket_growth_factor;
            self.entries
                .reserve_exact(grown.min(tuning.burst_threshold).saturating_sub(self.entries.len()));
        }
        self.entries.push(entry);
    }
}

struct Node<'k> {
    ended: Vec<usize>,
    slots: Box<[Slot<'k>; REDUCED_ALPHABET]>,
    /// Keys whose next byte is outside the ASCII range; sorted wholesale
    /// at this node's depth and emitted after the last ASCII slot.
    overflow: Bucket<'k>,
}

impl Node<'_> {
    fn new() -> Self {
        Self {
            ended: Vec::new(),
            slots: Box::new(std::array::from_fn(|_| Slot::Empty)),
            overflow: Bucket::default(),
        }
    }
}

/// The reduced-alphabet, tail-pointer burst trie.
pub(crate) struct RedesignedTrie<'k> {
    root: Node<'k>,
    tuning: TrieTuning,
    bursts: usize,
}

impl<'k> RedesignedTrie<'k> {
    pub(crate) fn new(tuning: TrieTuning) -> Self {
        Self {
            root: Node::new(),
            tuning,
            bursts: 0,
        }
    }

    pub(crate) fn bursts(&self) -> usize {
        self.bursts
    }

    /// Inserts a key, carrying its suffix cursor down the trie.
    pub(crate) fn insert(&mut self, key: &'k [u8], index: usize) {
        let tuning = self.tuning;
        let mut node = &mut self.root;
        let mut rest = key;

        loop {
            let Some((&c, after)) = rest.split_first() else {
                node.ended.push(index);
                return;
            };

            if (c as usize) >= REDUCED_ALPHABET {
                // Tail kept unconsumed: the overflow bucket sorts from
                // this node's depth.
                node.overflow.entries.push(Tail { index, rest });
                return;
            }

            let slot = &mut node.slots[c as usize];
            match slot {
                Slot::Node(child) => {
                    node = child;
                    rest = after;
                }
                Slot::Empty => {
                    *slot = Slot::Bucket(Bucket::with_first(Tail { index, rest: after }, tuning));
                    return;
                }
                Slot::Bucket(bucket) => {
                    bucket.push(Tail { index, rest: after }, tuning);
                    if bucket.entries.len() >= tuning.burst_threshold {
                        let full = mem::take(bucket);
                        *slot = Slot::Node(Box::new(burst(full, tuning)));
                        self.bursts += 1;
                    }
                    return;
                }
            }
        }
    }

    /// Post-order traversal in global key order: `ended` first, ASCII
    /// slots ascending, overflow last. The visitor receives each bucket's
    /// key indices (via a reused scratch buffer) and its depth.
    pub(crate) fn traverse<V: FnMut(&[usize], usize)>(&self, mut visit: V) {
        let mut scratch = Vec::new();
        Self::walk(&self.root, 0, &mut scratch, &mut visit);
    }

    fn walk<V: FnMut(&[usize], usize)>(
        node: &Node<'_>,
        depth: usize,
        scratch: &mut Vec<usize>,
        visit: &mut V,
    ) {
        if !node.ended.is_empty() {
            visit(&node.ended, depth);
        }
        for slot in node.slots.iter() {
            match slot {
                Slot::Empty => {}
                Slot::Bucket(bucket) => {
                    scratch.clear();
                    scratch.extend(bucket.entries.iter().map(|t| t.index));
                    visit(scratch.as_slice(), depth + 1);
                }
                Slot::Node(child) => Self::walk(child, depth + 1, scratch, visit),
            }
        }
        if !node.overflow.entries.is_empty() {
            scratch.clear();
            scratch.extend(node.overflow.entries.iter().map(|t| t.index));
            visit(scratch.as_slice(), depth);
        }
    }
}

/// Bursts a bucket by the first byte of each stored tail.
fn burst<'k>(bucket: Bucket<'k>, tuning: TrieTuning) -> Node<'k> {
    let mut node = Node::new();

    for entry in bucket.entries {
        let Some((&c, after)) = entry.rest.split_first() else {
            node.ended.push(entry.index);
            continue;
        };

        if (c as usize) >= REDUCED_ALPHABET {
            node.overflow.entries.push(entry);
            continue;
        }

        let slot = &mut node.slots[c as usize];
        let moved = Tail {
            index: entry.index,
            rest: after,
        };
        if let Slot::Bucket(child) = slot {
            child.push(moved, tuning);
        } else {
            *slot = Slot::Bucket(Bucket::with_first(moved, tuning));
        }
    }

    node
}

/// Performs an index-based burstsort with the redesigned trie.
///
/// Same contract as [`crate::burstsort`]; distinct tuning.
///
/// # Examples
///
/// ```
/// use burstsort::redesigned_burstsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// assert_eq!(redesigned_burstsort(&data), vec![1, 0, 2]);
/// ```
pub fn redesigned_burstsort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let (mut out, segments) = build_and_flatten(provider);
    emit::sort_segments(provider, &mut out, &segments);
    out
}

/// Sorts a mutable slice in-place with [`redesigned_burstsort`].
pub fn redesigned_burstsort_mut<T: AsRef<[u8]>>(data: &mut [T]) {
    let indices = redesigned_burstsort(data);
    emit::apply_permutation(data, indices);
}

/// [`redesigned_burstsort`] with the leaf sorts dispatched to a worker
/// pool. Fails with
/// [`SortError::Interrupted`](crate::SortError::Interrupted) if the pool
/// is interrupted mid-sort.
pub fn redesigned_burstsort_parallel<T: KeyAccessor + Sync + ?Sized>(
    provider: &T,
    pool: Option<&WorkerPool>,
) -> Result<Vec<usize>> {
    let (mut out, segments) = build_and_flatten(provider);
    emit::sort_segments_pooled(provider, &mut out, &segments, pool)?;
    Ok(out)
}

/// Sorts a mutable slice in-place with [`redesigned_burstsort_parallel`].
///
/// The slice is left untouched if the pool is interrupted.
pub fn redesigned_burstsort_parallel_mut<T: AsRef<[u8]> + Sync>(
    data: &mut [T],
    pool: Option<&WorkerPool>,
) -> Result<()> {
    let indices = redesigned_burstsort_parallel(data, pool)?;
    emit::apply_permutation(data, indices);
    Ok(())
}

fn build_and_flatten<T: KeyAccessor + ?Sized>(provider: &T) -> (Vec<usize>, Vec<Segment>) {
    let len = provider.len();
    let mut trie = RedesignedTrie::new(TrieTuning::redesigned());
    for index in 0..len {
        trie.insert(provider.get_key(index), index);
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
        "redesigned burst trie: {} keys, {} sortable buckets, {} bursts",
        len,
        segments.len(),
        trie.bursts()
    );

    (out, segments)
}
