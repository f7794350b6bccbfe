//! Numeric kernels.
//!
//! Each kernel is generic over [`NumericBuffer`](crate::buffers::NumericBuffer)
//! and validates its inputs before writing anything, so a failed call leaves
//! every output buffer as it was. DGEMM and STREAM additionally expose bulk
//! paths for [`VectorizedBuffer`](crate::buffers::VectorizedBuffer).
//!
//! Kernels have no dependency on the timing harness.

pub mod dft;
pub mod dgemm;
pub mod gauss_seidel;
pub mod stream;

pub use dft::{transform, transform_into, DftVariant};
pub use dgemm::{multiply_accumulate, multiply_accumulate_bulk};
pub use gauss_seidel::{relax, relax_iterations, relax_iterations_into};
pub use stream::{StreamBuffers, StreamOp};
