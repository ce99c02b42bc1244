use thiserror::Error;

/// Errors returned by index-based heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The index passed to `remove`, `fix` or `update` was not below `len()`.
    #[error("index {index} out of bounds for heap of length {len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the heap at the time of the call.
        len: usize,
    },
}
