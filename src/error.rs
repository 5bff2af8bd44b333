//! Error types surfaced by the parallel sort variants.
//!
//! The single-threaded sorters are total functions and never fail. Only the
//! pool-backed entry points can return an error, and only when the pool was
//! interrupted while a sort was in flight.

use thiserror::Error;

/// Errors produced by the sorting engines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SortError {
    /// The worker pool was interrupted before all submitted bucket or block
    /// sorts completed. The caller's array may be partially reordered.
    #[error("worker pool interrupted before the sort completed")]
    Interrupted,
}

/// Sort result.
pub type Result<T> = std::result::Result<T, SortError>;
