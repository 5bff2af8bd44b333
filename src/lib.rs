//! # Burstsort
//!
//! `burstsort` is a high-performance, cache-conscious sorting library for
//! strings, byte arrays, and any other data that can be viewed as
//! variable-length byte keys.
//!
//! It implements two sorting cores that beat general comparison sorting on
//! large string sets by engineering for the memory hierarchy rather than
//! for comparison counts:
//!
//! - **Burstsort**: builds a [burst trie](trie::BurstTrie) — a shallow
//!   trie whose leaves are overflow buckets that lazily "burst" into
//!   deeper nodes as they fill — then finishes each bucket with multikey
//!   quicksort on a working set small enough to stay in cache. A
//!   *redesigned* variant folds the alphabet to ASCII and carries tail
//!   pointers through bursts so prefixes are never rescanned.
//! - **Lazy funnelsort**: a cache-oblivious mergesort that partitions the
//!   input into N^(1/3) blocks and merges them through a
//!   [k-merger](funnel::KMerger) whose buffers follow the van Emde Boas
//!   schedule and are refilled only on demand.
//!
//! [Multikey quicksort](multikey_quicksort) (three-way radix quicksort) is
//! also exposed as a standalone sorter. Both engines have parallel
//! variants that dispatch independent bucket or block sorts onto a
//! [`WorkerPool`].
//!
//! ## Key Features
//!
//! - **Zero-copy abstractions**: the [`KeyAccessor`] trait sorts arbitrary
//!   collections (`Vec<String>`, `Vec<Vec<u8>>`, flat Arrow-style buffers)
//!   without copying key bytes; the sorters only move index references.
//! - **Prefix-aware comparisons**: the end-of-string sentinel orders
//!   shorter prefixes before their extensions, and every comparison is on
//!   unsigned byte values.
//! - **In-place mutation**: every entry point has a `_mut` twin that sorts
//!   a slice in place by applying the computed permutation.
//! - **Deterministic parallelism**: parallel variants produce output
//!   identical to their serial twins; units of work own disjoint output
//!   slices, so no locks are taken on key data.
//!
//! ## Usage
//!
//! ```rust
//! use burstsort::burstsort_mut;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! burstsort_mut(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! Custom types implement [`KeyAccessor`] to sort without materializing
//! intermediate strings:
//!
//! ```rust
//! use burstsort::{burstsort, KeyAccessor};
//!
//! struct User {
//!     username: String,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation.
//! struct Users(Vec<User>);
//!
//! impl KeyAccessor for Users {
//!     fn get_key(&self, index: usize) -> &[u8] {
//!         self.0[index].username.as_bytes()
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let users = Users(vec![
//!     User { username: "Bob".to_string() },
//!     User { username: "Alice".to_string() },
//! ]);
//!
//! // Returns indices: [1, 0] (Alice, Bob)
//! let indices = burstsort(&users);
//! assert_eq!(indices, vec![1, 0]);
//! ```
//!
//! ## Choosing an algorithm
//!
//! - Large inputs with shared prefixes (URLs, paths, words): burstsort.
//! - Mostly-ASCII data with heavy duplication: redesigned burstsort.
//! - When worst-case cache complexity matters more than constants, or the
//!   input is close to random bytes: lazy funnelsort.
//! - Small inputs or leaf sorting: multikey quicksort.
//!
//! None of the sorts is stable. All of them tolerate empty keys, repeated
//! keys, and keys of unbounded length. Auxiliary memory is proportional to
//! the input (an index per key plus trie or merger buffers); key bytes are
//! never copied or modified.
//!
//! ## Errors and logging
//!
//! Single-threaded entry points are total functions. The parallel variants
//! return [`SortError::Interrupted`] when their [`WorkerPool`] is
//! interrupted mid-sort. Phase boundaries log through the [`log`] facade;
//! the library installs no logger.

pub mod burst;
pub mod error;
pub mod funnel;
pub mod funnelsort;
pub mod key;
pub mod mkq;
pub mod pool;
pub mod redesign;
pub mod trie;
pub mod tuning;

mod emit;

pub use burst::{burstsort, burstsort_mut, burstsort_parallel, burstsort_parallel_mut};
pub use error::{Result, SortError};
pub use funnelsort::{
    lazy_funnelsort, lazy_funnelsort_mut, lazy_funnelsort_threaded, lazy_funnelsort_threaded_mut,
};
pub use key::KeyAccessor;
pub use mkq::{multikey_quicksort, multikey_quicksort_mut};
pub use pool::WorkerPool;
pub use redesign::{
    redesigned_burstsort, redesigned_burstsort_mut, redesigned_burstsort_parallel,
    redesigned_burstsort_parallel_mut,
};

pub mod prelude {
    pub use crate::burst::{burstsort, burstsort_mut, burstsort_parallel, burstsort_parallel_mut};
    pub use crate::error::{Result, SortError};
    pub use crate::funnelsort::{
        lazy_funnelsort, lazy_funnelsort_mut, lazy_funnelsort_threaded,
        lazy_funnelsort_threaded_mut,
    };
    pub use crate::key::KeyAccessor;
    pub use crate::mkq::{multikey_quicksort, multikey_quicksort_mut};
    pub use crate::pool::WorkerPool;
    pub use crate::redesign::{
        redesigned_burstsort, redesigned_burstsort_mut, redesigned_burstsort_parallel,
        redesigned_burstsort_parallel_mut,
    };
}
