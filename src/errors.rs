//! Provides the error type used throughout this crate.
//!
//! Expected absence (an empty stack, a missing key, a vertex that is not in
//! the graph) is *not* an error and is reported with `Option` instead.

use thiserror::Error;

/// Violations of structural preconditions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimerError {
    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Arena slot {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("Handle to slot {slot} is stale (generation {generation})")]
    StaleHandle { slot: usize, generation: u32 },
    #[error("Cannot draw values from the empty range {start}..={end}")]
    EmptyValueRange { start: i64, end: i64 },
}
