//! Benchmark suite for kernel and representation performance testing.
//!
//! This module drives the kernels through the timing harness, compares the
//! dynamic, packed and vectorized representations, and reports per-size
//! statistics with derived throughput.

pub mod benchmark_errors;
pub mod benchmark_runner;
pub mod benchmark_types;
pub mod performance_metrics;
pub mod suites;

pub use benchmark_errors::{BenchmarkError, BenchmarkResult};
pub use benchmark_runner::{BenchmarkRunner, ConfigLoader};
pub use benchmark_types::{
    BenchmarkConfig, BenchmarkReport, DftConfig, DgemmConfig, GaussSeidelConfig,
    PerformanceResults, SizeFailure, SizeResult, StreamConfig,
};
pub use performance_metrics::{print_performance_analysis, verify_outputs_match};
