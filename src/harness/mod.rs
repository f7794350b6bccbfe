//! Timing and statistics harness.
//!
//! The harness wraps kernel calls, times each repetition with a monotonic
//! clock and summarizes the results. Buffers are expected to be allocated by
//! the caller before [`measure`] starts the clock.

pub mod clock;
pub mod metrics;
pub mod timing;

pub use clock::clock_granularity;
pub use metrics::{bandwidth, flops};
pub use timing::{measure, measure_with_setup, sweep, SweepPoint, TimingSample};
