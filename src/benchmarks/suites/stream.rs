use crate::benchmarks::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::benchmarks::benchmark_types::{BenchmarkReport, PerformanceResults, StreamConfig};
use crate::benchmarks::performance_metrics::verify_outputs_match;
use crate::buffers::{DynamicBuffer, NumericBuffer, PackedBuffer, Representation, VectorizedBuffer};
use crate::errors::{KernelError, KernelResult};
use crate::harness::{bandwidth, measure, sweep, SweepPoint, TimingSample};
use crate::kernels::stream::{StreamBuffers, StreamOp};
use log::{error, info};

/// Brings freshly allocated buffers to the state `op` sees in a full
/// copy, scale, sum, triad pass by running the preceding operations once.
fn prepare<B: NumericBuffer>(
    len: usize,
    op: StreamOp,
    scalar: f64,
) -> KernelResult<StreamBuffers<B>> {
    let mut buffers = StreamBuffers::<B>::standard(len)?;
    for prior in StreamOp::ALL.into_iter().take_while(|&prior| prior != op) {
        buffers.apply(prior, scalar)?;
    }
    Ok(buffers)
}

fn time_op<B: NumericBuffer>(
    config: &StreamConfig,
    op: StreamOp,
    len: usize,
    repetitions: u32,
) -> KernelResult<TimingSample> {
    let mut buffers = prepare::<B>(len, op, config.scalar)?;
    measure(|| buffers.apply(op, config.scalar), repetitions)
}

fn time_op_bulk(
    config: &StreamConfig,
    op: StreamOp,
    len: usize,
    repetitions: u32,
) -> KernelResult<TimingSample> {
    let mut buffers = prepare::<VectorizedBuffer>(len, op, config.scalar)?;
    measure(|| buffers.apply_bulk(op, config.scalar), repetitions)
}

fn run_sweep<F>(
    config: &StreamConfig,
    method: &str,
    op: StreamOp,
    time: F,
) -> Vec<SweepPoint<KernelError>>
where
    F: Fn(&StreamConfig, StreamOp, usize, u32) -> KernelResult<TimingSample>,
{
    sweep(&config.sizes, config.repetitions, |len, repetitions| {
        info!("  {} {} len={} ({} repetitions)", method, op, len, repetitions);
        time(config, op, len, repetitions)
    })
}

/// Runs the bandwidth sweep of one operation for one representation.
pub fn run_representation(
    config: &StreamConfig,
    representation: Representation,
    op: StreamOp,
) -> PerformanceResults {
    let label = match representation {
        Representation::Vectorized if config.bulk_vectorized => "vectorized (bulk)".to_string(),
        other => other.to_string(),
    };
    let points = match representation {
        Representation::Dynamic => run_sweep(config, &label, op, time_op::<DynamicBuffer>),
        Representation::Packed => run_sweep(config, &label, op, time_op::<PackedBuffer>),
        Representation::Vectorized if config.bulk_vectorized => {
            run_sweep(config, &label, op, time_op_bulk)
        }
        Representation::Vectorized => run_sweep(config, &label, op, time_op::<VectorizedBuffer>),
    };
    PerformanceResults::from_sweep(format!("{} {}", label, op), points, |len, sample| {
        Some(bandwidth(sample.mean_seconds(), op.bytes_moved(len)))
    })
}

fn final_state<B: NumericBuffer>(len: usize, scalar: f64) -> KernelResult<[Vec<f64>; 3]> {
    let mut buffers = StreamBuffers::<B>::standard(len)?;
    buffers.run_all(scalar)?;
    Ok([buffers.a.to_vec(), buffers.b.to_vec(), buffers.c.to_vec()])
}

fn final_state_bulk(len: usize, scalar: f64) -> KernelResult<[Vec<f64>; 3]> {
    let mut buffers = StreamBuffers::<VectorizedBuffer>::standard(len)?;
    for op in StreamOp::ALL {
        buffers.apply_bulk(op, scalar)?;
    }
    Ok([buffers.a.to_vec(), buffers.b.to_vec(), buffers.c.to_vec()])
}

/// Checks a full copy, scale, sum, triad pass on every kernel path against
/// packed storage.
pub fn verify(len: usize, scalar: f64) -> BenchmarkResult<()> {
    let expected = final_state::<PackedBuffer>(len, scalar)?;
    let candidates = [
        ("dynamic", final_state::<DynamicBuffer>(len, scalar)?),
        ("vectorized", final_state::<VectorizedBuffer>(len, scalar)?),
        ("vectorized (bulk)", final_state_bulk(len, scalar)?),
    ];
    for (method, actual) in candidates {
        let matches = expected
            .iter()
            .zip(actual.iter())
            .all(|(e, a)| verify_outputs_match(e, a));
        if !matches {
            error!("❌ STREAM {} output differs from packed baseline", method);
            return Err(BenchmarkError::VerificationFailed {
                benchmark_name: "stream".to_string(),
                message: format!("{} output differs from packed baseline", method),
            });
        }
    }
    Ok(())
}

/// Verifies, then times every operation on every configured representation.
pub fn run(config: &StreamConfig) -> BenchmarkResult<BenchmarkReport> {
    config.validate()?;

    info!("{}", "=".repeat(80));
    info!("STREAM Bandwidth Benchmark");
    info!("Buffer lengths: {:?}", config.sizes);
    info!("Scalar: {}", config.scalar);
    info!("{}", "=".repeat(80));

    info!("Verifying output consistency across representations...");
    verify(config.sizes[0], config.scalar)?;
    info!("✅ Outputs match - representations are consistent");

    let mut results = Vec::new();
    for op in StreamOp::ALL {
        for &representation in &config.representations {
            results.push(run_representation(config, representation, op));
        }
    }

    Ok(BenchmarkReport {
        benchmark: config.name.clone(),
        description: config.description.clone(),
        throughput_unit: Some("B/s".to_string()),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_runs_preceding_ops() {
        let buffers = prepare::<PackedBuffer>(4, StreamOp::Triad, 2.0).unwrap();
        assert_eq!(buffers.c.to_vec(), vec![3.0; 4]);
        assert_eq!(buffers.b.to_vec(), vec![2.0; 4]);
        assert_eq!(buffers.a.to_vec(), vec![1.0; 4]);
    }

    #[test]
    fn test_small_run_reports_bandwidth() {
        let config = StreamConfig {
            sizes: vec![16, 64],
            repetitions: 3,
            ..StreamConfig::default()
        };
        let report = run(&config).unwrap();
        assert_eq!(report.results.len(), 12);
        assert_eq!(report.results[0].method, "dynamic copy");
        assert!(report
            .results
            .iter()
            .all(|r| r.points.iter().all(|p| p.throughput.is_some())));
    }
}
