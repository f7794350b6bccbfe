//! Error types for the kernel benchmark library.
//!
//! Kernels report precondition failures through [`KernelError`]; the benchmark
//! layer wraps these in its own error type (see `benchmarks::BenchmarkError`).

mod kernel_error;

pub use kernel_error::KernelError;

/// Result type alias for buffer and kernel operations.
pub type KernelResult<T> = std::result::Result<T, KernelError>;
