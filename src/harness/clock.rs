//! Monotonic clock granularity estimate.

use std::time::{Duration, Instant};

/// Number of tick samples taken by [`clock_granularity`].
pub const DEFAULT_TICK_SAMPLES: usize = 200;

/// Estimates the smallest observable step of [`Instant`].
///
/// Each sample spins until two consecutive readings differ and records the
/// later one; the result is the smallest gap between consecutive recorded
/// readings. Measurements much shorter than this are noise.
pub fn clock_granularity(samples: usize) -> Duration {
    let samples = samples.max(2);
    let mut ticks = Vec::with_capacity(samples);
    for _ in 0..samples {
        let t1 = Instant::now();
        let mut t2 = Instant::now();
        while t2 == t1 {
            t2 = Instant::now();
        }
        ticks.push(t2);
    }

    ticks
        .windows(2)
        .map(|pair| pair[1].duration_since(pair[0]))
        .filter(|delta| !delta.is_zero())
        .min()
        .unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_is_positive_and_small() {
        let tick = clock_granularity(DEFAULT_TICK_SAMPLES);
        assert!(tick > Duration::ZERO);
        assert!(tick < Duration::from_millis(100));
    }
}
