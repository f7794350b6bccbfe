//! Throughput figures derived from elapsed times.
//!
//! A zero elapsed time (below clock granularity) yields `f64::INFINITY`
//! rather than a division error.

use crate::kernels::dgemm;

/// Floating-point operations per second of an `N x N` DGEMM taking `seconds`.
pub fn flops(seconds: f64, n: usize) -> f64 {
    rate(dgemm::flop_count(n), seconds)
}

/// Bytes per second for `bytes_moved` bytes transferred in `seconds`.
pub fn bandwidth(seconds: f64, bytes_moved: u64) -> f64 {
    rate(bytes_moved as f64, seconds)
}

fn rate(amount: f64, seconds: f64) -> f64 {
    if seconds <= 0.0 {
        return f64::INFINITY;
    }
    amount / seconds
}
