//! Error types for kernel and buffer operations.

use thiserror::Error;

/// Errors raised by buffer construction and kernel preconditions.
///
/// Every variant is returned before a kernel touches its output buffers, so a
/// failed call leaves all caller-owned data exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("Dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid size: {size}. Must be greater than 0")]
    InvalidSize { size: usize },
}

impl KernelError {
    pub(crate) fn dimension_mismatch(operation: &str, expected: usize, actual: usize) -> Self {
        KernelError::DimensionMismatch {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }
}
