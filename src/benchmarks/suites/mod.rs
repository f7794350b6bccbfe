//! Per-kernel benchmark suites.
//!
//! Every suite checks that all representations agree with the packed
//! baseline before it starts timing, then sweeps the configured problem sizes
//! once per representation.

pub mod dft;
pub mod dgemm;
pub mod gauss_seidel;
pub mod stream;

pub use dft::create_signal;
pub use dgemm::create_matrix_data;
pub use gauss_seidel::create_field;
