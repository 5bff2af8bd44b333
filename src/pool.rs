//! A small worker pool for the parallel sort variants.
//!
//! Work items are pairwise independent (each owns a disjoint slice of the
//! output array), so the pool is nothing more than a shared queue drained
//! by scoped OS threads: submission never blocks, [`WorkerPool::execute`]
//! blocks the caller until every item has been taken care of, and idle
//! workers block on the queue.
//!
//! Interruption is cooperative. Raising the flag lets every worker finish
//! the item it is on and stop pulling new ones; `execute` then reports
//! [`SortError::Interrupted`] to the caller.

use crate::error::{Result, SortError};
use cuneiform::cuneiform;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

// Cache-line padded so the frequently polled flag never false-shares with
// neighboring allocations.
#[cuneiform]
struct InterruptFlag {
    raised: AtomicBool,
}

/// A fixed-size pool of `P` workers draining a shared work queue.
///
/// The pool holds no threads while idle; `execute` spawns its workers
/// scoped to the call, which is what lets tasks borrow the caller's data.
///
/// # Examples
///
/// ```
/// use burstsort::WorkerPool;
///
/// let pool = WorkerPool::new(2);
/// let mut chunks = vec![vec![3, 1], vec![2, 0]];
/// pool.execute(chunks.iter_mut().collect(), |chunk: &mut Vec<i32>| chunk.sort())
///     .unwrap();
/// assert_eq!(chunks, vec![vec![1, 3], vec![0, 2]]);
/// ```
pub struct WorkerPool {
    workers: usize,
    flag: InterruptFlag,
}

impl Default for WorkerPool {
    /// A pool sized to the available hardware parallelism.
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl WorkerPool {
    /// Creates a pool of `workers` threads (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            flag: InterruptFlag {
                raised: AtomicBool::new(false),
            },
        }
    }

    /// Number of workers spawned per `execute` call.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Raises the interrupt flag. Workers finish their current item;
    /// `execute` calls in flight return [`SortError::Interrupted`].
    pub fn interrupt(&self) {
        self.flag.raised.store(true, Ordering::Release);
    }

    /// Whether the pool has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.flag.raised.load(Ordering::Acquire)
    }

    /// Runs `task` over every item on the pool's workers and blocks until
    /// all of them are done.
    ///
    /// Completion order is unspecified; items must not overlap. Returns
    /// [`SortError::Interrupted`] if the pool was interrupted before the
    /// queue drained.
    pub fn execute<I, F>(&self, items: Vec<I>, task: F) -> Result<()>
    where
        I: Send,
        F: Fn(I) + Sync,
    {
        if self.is_interrupted() {
            return Err(SortError::Interrupted);
        }

        log::trace!("pool: {} items on {} workers", items.len(), self.workers);

        let (tx, rx) = crossbeam_channel::unbounded();
        for item in items {
            // The receiver outlives the loop, so the queue cannot close.
            tx.send(item).expect("work queue closed during submission");
        }
        drop(tx);

        thread::scope(|s| {
            for _ in 0..self.workers {
                let rx = rx.clone();
                let flag = &self.flag;
                let task = &task;
                s.spawn(move || {
                    while let Ok(item) = rx.recv() {
                        if flag.raised.load(Ordering::Acquire) {
                            break;
                        }
                        task(item);
                    }
                });
            }
        });

        if self.is_interrupted() {
            Err(SortError::Interrupted)
        } else {
            Ok(())
        }
    }
}
