//! The lazy k-merger: a cache-oblivious merging tree.
//!
//! A k-merger is a balanced binary tree of two-way merge nodes with the
//! k sorted input runs at its leaves. Every internal edge carries a
//! buffer; a node fills its output buffer only when the consumer above has
//! drained it, pulling from its children's buffers and asking *them* to
//! refill only when empty. That laziness is what bounds the working set
//! to the buffer schedule instead of the whole input.
//!
//! Buffer capacities follow the van Emde Boas layout and are computed once
//! at construction: a merger of 2^h leaves splits at height ⌈h/2⌉ into a
//! top merger fed by bottom mergers, and every edge crossing that split
//! gets a buffer of k^(3/2) slots (k the leaf count of the merger being
//! split); the top and bottom mergers then schedule their own internal
//! edges recursively. For k = 2 the merger is a single binary node with no
//! internal buffers.
//!
//! Elements are indices into a caller-held run array; comparisons read the
//! referenced keys through [`KeyAccessor`]. The merger never copies key
//! bytes.

use crate::key::KeyAccessor;
use std::ops::Range;

/// One input of a binary merge node: either a cursor over a slice of the
/// run array, or a buffered child node.
enum Feed {
    Run {
        next: usize,
        end: usize,
    },
    Node {
        inner: Box<MergeNode>,
        buf: Vec<usize>,
        head: usize,
        done: bool,
    },
}

impl Feed {
    /// Returns the next element without consuming it, refilling the buffer
    /// from the child node if it has been drained. `None` means exhausted.
    fn peek<T: KeyAccessor + ?Sized>(&mut self, provider: &T, runs: &[usize]) -> Option<usize> {
        match self {
            Feed::Run { next, end } => (*next < *end).then(|| runs[*next]),
            Feed::Node {
                inner,
                buf,
                head,
                done,
            } => {
                if *head == buf.len() && !*done {
                    let target = buf.capacity();
                    buf.clear();
                    *head = 0;
                    inner.fill(provider, runs, buf, target);
                    *done = buf.is_empty();
                }
                buf.get(*head).copied()
            }
        }
    }

    /// Consumes the element last returned by `peek`.
    fn advance(&mut self) {
        match self {
            Feed::Run { next, .. } => *next += 1,
            Feed::Node { head, .. } => *head += 1,
        }
    }
}

/// A binary buffered merge node: takes the smaller of its two current
/// inputs until the requested output length is reached or both inputs are
/// exhausted.
struct MergeNode {
    left: Feed,
    right: Feed,
}

impl MergeNode {
    /// Appends up to `target` elements of the merged sequence to `out`.
    ///
    /// `out`, when non-empty, is a sorted prefix of the merge of the two
    /// children's remaining elements; children are read strictly in
    /// ascending order.
    fn fill<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        runs: &[usize],
        out: &mut Vec<usize>,
        target: usize,
    ) {
        while out.len() < target {
            match (
                self.left.peek(provider, runs),
                self.right.peek(provider, runs),
            ) {
                (Some(a), Some(b)) => {
                    if provider.get_key(a) <= provider.get_key(b) {
                        self.left.advance();
                        out.push(a);
                    } else {
                        self.right.advance();
                        out.push(b);
                    }
                }
                (Some(a), None) => {
                    self.left.advance();
                    out.push(a);
                }
                (None, Some(b)) => {
                    self.right.advance();
                    out.push(b);
                }
                (None, None) => break,
            }
        }
    }
}

/// A k-merger over sorted runs of key indices.
///
/// # Examples
///
/// ```
/// use burstsort::funnel::KMerger;
///
/// let data = vec!["ant", "fox", "bee", "owl"];
/// // Two sorted runs over the index array: [0, 2] and [1, 3].
/// let runs = vec![0, 2, 1, 3];
/// let mut merger = KMerger::new(&[0..2, 2..4]);
///
/// let mut out = Vec::new();
/// merger.fill(&data, &runs, &mut out, usize::MAX);
/// assert_eq!(out, vec![0, 1, 2, 3]); // ant, bee, fox, owl
/// ```
pub struct KMerger {
    root: Feed,
}

impl KMerger {
    /// Builds a k-merger over the given ranges of a run array. Each range
    /// must hold indices whose keys are already sorted.
    ///
    /// # Panics
    ///
    /// Panics if `runs` is empty.
    pub fn new(runs: &[Range<usize>]) -> Self {
        assert!(!runs.is_empty(), "a k-merger needs at least one input run");

        let k = runs.len();
        let height = k.next_power_of_two().trailing_zeros() as usize;
        let mut caps = vec![0usize; height.max(1)];
        schedule(height, 0, &mut caps);

        log::trace!("k-merger: {} runs, height {}", k, height);

        Self {
            root: build(runs, 0, &caps),
        }
    }

    /// Produces up to `target` further elements of the merged sequence,
    /// appending them to `out`. Stops early only when every input run is
    /// exhausted and all internal buffers are drained; repeated calls
    /// drain the merger incrementally.
    pub fn fill<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        runs: &[usize],
        out: &mut Vec<usize>,
        target: usize,
    ) {
        match &mut self.root {
            Feed::Node { inner, .. } => inner.fill(provider, runs, out, target),
            // Degenerate single-run merger: copy straight from the run.
            Feed::Run { next, end } => {
                let take = target.saturating_sub(out.len()).min(*end - *next);
                out.extend_from_slice(&runs[*next..*next + take]);
                *next += take;
            }
        }
    }

    /// Drains the merger to exhaustion into `out`.
    pub fn drain_into<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        runs: &[usize],
        out: &mut Vec<usize>,
    ) {
        self.fill(provider, runs, out, usize::MAX);
    }
}

/// Assigns the van Emde Boas buffer capacities for a merger spanning tree
/// depths `[base, base + height]`. `caps[d]` is the output-buffer capacity
/// of an internal node at depth `d`.
fn schedule(height: usize, base: usize, caps: &mut Vec<usize>) {
    if height <= 1 {
        return;
    }

    let bottom = height / 2;
    let top = height - bottom;
    let k = 1u64 << height;
    // k^(3/2) slots for every edge crossing the top/bottom split.
    let size = (k as f64).powf(1.5).ceil() as usize;

    caps[base + top] = size;
    schedule(top, base, caps);
    schedule(bottom, base + top, caps);
}

/// Builds the merge tree over `runs`, handing each internal child a buffer
/// of the capacity scheduled for its depth.
fn build(runs: &[Range<usize>], depth: usize, caps: &[usize]) -> Feed {
    if let [run] = runs {
        return Feed::Run {
            next: run.start,
            end: run.end,
        };
    }

    let mid = runs.len().div_ceil(2);
    let node = MergeNode {
        left: build(&runs[..mid], depth + 1, caps),
        right: build(&runs[mid..], depth + 1, caps),
    };

    // The root's output goes straight to the consumer; internal edges get
    // their scheduled buffer.
    let cap = if depth == 0 {
        0
    } else {
        caps.get(depth).copied().unwrap_or(0).max(2)
    };

    Feed::Node {
        inner: Box::new(node),
        buf: Vec::with_capacity(cap),
        head: 0,
        done: false,
    }
}
