//! Repetition timing and size sweeps.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Elapsed times of repeated calls to one kernel at one problem size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    elapsed_ns: Vec<u64>,
}

impl TimingSample {
    pub fn from_nanos(elapsed_ns: Vec<u64>) -> Self {
        Self { elapsed_ns }
    }

    pub fn elapsed_ns(&self) -> &[u64] {
        &self.elapsed_ns
    }

    pub fn repetitions(&self) -> usize {
        self.elapsed_ns.len()
    }

    /// Arithmetic mean in nanoseconds, 0 for an empty sample.
    pub fn mean_ns(&self) -> f64 {
        if self.elapsed_ns.is_empty() {
            return 0.0;
        }
        let total: f64 = self.elapsed_ns.iter().map(|&t| t as f64).sum();
        total / self.elapsed_ns.len() as f64
    }

    /// Population standard deviation in nanoseconds, 0 for an empty sample.
    pub fn std_dev_ns(&self) -> f64 {
        if self.elapsed_ns.is_empty() {
            return 0.0;
        }
        let mean = self.mean_ns();
        let variance = self
            .elapsed_ns
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.elapsed_ns.len() as f64;
        variance.sqrt()
    }

    pub fn min_ns(&self) -> u64 {
        self.elapsed_ns.iter().copied().min().unwrap_or(0)
    }

    pub fn mean_seconds(&self) -> f64 {
        self.mean_ns() * 1e-9
    }

    pub fn std_dev_seconds(&self) -> f64 {
        self.std_dev_ns() * 1e-9
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean_ns() * 1e-6
    }

    pub fn std_dev_ms(&self) -> f64 {
        self.std_dev_ns() * 1e-6
    }
}

/// Times `kernel_call` once per repetition.
///
/// Each call is bracketed by two reads of a monotonic clock. The first error
/// aborts the measurement and is returned unchanged.
pub fn measure<F, E>(kernel_call: F, repetitions: u32) -> Result<TimingSample, E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut kernel_call = kernel_call;
    measure_with_setup(|| (), |_| kernel_call(), repetitions)
}

/// Like [`measure`], but runs `setup` before every repetition outside the
/// timed region.
///
/// Use it when a kernel mutates its inputs and each repetition must start from
/// the same state (for example zeroing the DGEMM accumulator).
pub fn measure_with_setup<S, T, F, E>(
    mut setup: S,
    mut kernel_call: F,
    repetitions: u32,
) -> Result<TimingSample, E>
where
    S: FnMut() -> T,
    F: FnMut(&mut T) -> Result<(), E>,
{
    let mut elapsed_ns = Vec::with_capacity(repetitions as usize);
    for _ in 0..repetitions {
        let mut state = setup();
        let start = Instant::now();
        kernel_call(&mut state)?;
        let elapsed = start.elapsed();
        elapsed_ns.push(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX));
    }

    let sample = TimingSample::from_nanos(elapsed_ns);
    debug!(
        "Measured {} repetitions: mean {:.3} ms, std {:.3} ms",
        sample.repetitions(),
        sample.mean_ms(),
        sample.std_dev_ms()
    );
    Ok(sample)
}

/// Outcome of one problem size within a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint<E> {
    pub size: usize,
    pub outcome: Result<TimingSample, E>,
}

impl<E> SweepPoint<E> {
    pub fn sample(&self) -> Option<&TimingSample> {
        self.outcome.as_ref().ok()
    }
}

/// Runs `run(size, repetitions)` for every size in order.
///
/// A failing size is recorded in its [`SweepPoint`] and the sweep moves on to
/// the next size.
pub fn sweep<F, E>(sizes: &[usize], repetitions: u32, mut run: F) -> Vec<SweepPoint<E>>
where
    F: FnMut(usize, u32) -> Result<TimingSample, E>,
{
    sizes
        .iter()
        .map(|&size| SweepPoint {
            size,
            outcome: run(size, repetitions),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: f64 = 1e-9;

    #[test]
    fn test_statistics_are_population_based() {
        let sample = TimingSample::from_nanos(vec![2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((sample.mean_ns() - 5.0).abs() < DELTA);
        assert!((sample.std_dev_ns() - 2.0).abs() < DELTA);
        assert_eq!(sample.min_ns(), 2);
    }

    #[test]
    fn test_empty_sample() {
        let sample = TimingSample::from_nanos(vec![]);
        assert_eq!(sample.mean_ns(), 0.0);
        assert_eq!(sample.std_dev_ns(), 0.0);
        assert_eq!(sample.repetitions(), 0);
    }

    #[test]
    fn test_measure_calls_exactly_repetitions_times() {
        let mut calls = 0;
        let sample = measure(
            || {
                calls += 1;
                Ok::<(), ()>(())
            },
            7,
        )
        .unwrap();
        assert_eq!(calls, 7);
        assert_eq!(sample.repetitions(), 7);
    }

    #[test]
    fn test_measure_propagates_first_error() {
        let mut calls = 0;
        let result = measure(
            || {
                calls += 1;
                if calls == 3 { Err("boom") } else { Ok(()) }
            },
            10,
        );
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_setup_runs_before_every_repetition() {
        let mut setups = 0;
        let sample = measure_with_setup(
            || {
                setups += 1;
                vec![0u8; 4]
            },
            |state: &mut Vec<u8>| {
                assert!(state.iter().all(|&b| b == 0));
                state[0] = 1;
                Ok::<(), ()>(())
            },
            5,
        )
        .unwrap();
        assert_eq!(setups, 5);
        assert_eq!(sample.repetitions(), 5);
    }

    #[test]
    fn test_sweep_continues_after_failure() {
        let points = sweep(&[1, 2, 3], 2, |size, reps| {
            if size == 2 {
                Err(format!("size {} failed", size))
            } else {
                Ok(TimingSample::from_nanos(vec![size as u64; reps as usize]))
            }
        });
        assert_eq!(points.len(), 3);
        assert!(points[0].sample().is_some());
        assert!(points[1].outcome.is_err());
        assert_eq!(points[2].sample().map(|s| s.repetitions()), Some(2));
    }
}
