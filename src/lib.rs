//! Micro-benchmarks and correctness checks for small numeric kernels.
//!
//! The crate times a discrete Fourier transform, a dense matrix
//! multiply-accumulate, Gauss-Seidel relaxation and the STREAM bandwidth
//! operations over three buffer representations, and verifies that every
//! representation produces the same results.
//!
//! - [`buffers`]: the [`NumericBuffer`] trait and its dynamic, packed and
//!   vectorized implementations.
//! - [`kernels`]: the numeric kernels, generic over [`NumericBuffer`].
//! - [`harness`]: repetition timing, size sweeps and throughput metrics.
//! - [`benchmarks`]: configurable suites, verification and reporting.

pub mod benchmarks;
pub mod buffers;
pub mod errors;
pub mod harness;
pub mod kernels;

pub use buffers::{
    allocate, AnyBuffer, DynamicBuffer, NumericBuffer, PackedBuffer, Representation, ScalarField,
    VectorizedBuffer,
};
pub use errors::{KernelError, KernelResult};
pub use harness::{bandwidth, flops, measure, sweep, TimingSample};
