//! Prints the observed granularity of the monotonic clock used for timing.

use kernel_bench::harness::clock::{clock_granularity, DEFAULT_TICK_SAMPLES};
use log::info;
use std::env;

fn main() {
    env_logger::init();

    let runs: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);

    info!(
        "Probing clock granularity: {} runs of {} samples",
        runs, DEFAULT_TICK_SAMPLES
    );

    let mut ticks: Vec<u128> = (0..runs.max(1))
        .map(|_| clock_granularity(DEFAULT_TICK_SAMPLES).as_nanos())
        .collect();
    ticks.sort_unstable();

    let mean = ticks.iter().sum::<u128>() as f64 / ticks.len() as f64;
    println!("Monotonic clock granularity over {} runs:", ticks.len());
    println!("   min:    {} ns", ticks[0]);
    println!("   median: {} ns", ticks[ticks.len() / 2]);
    println!("   mean:   {:.1} ns", mean);
    println!("   max:    {} ns", ticks[ticks.len() - 1]);
}
