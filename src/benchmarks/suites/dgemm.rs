use crate::benchmarks::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::benchmarks::benchmark_types::{BenchmarkReport, DgemmConfig, PerformanceResults};
use crate::benchmarks::performance_metrics::verify_outputs_match;
use crate::buffers::{DynamicBuffer, NumericBuffer, PackedBuffer, Representation, VectorizedBuffer};
use crate::errors::{KernelError, KernelResult};
use crate::harness::{flops, measure_with_setup, sweep, SweepPoint, TimingSample};
use crate::kernels::dgemm::{multiply_accumulate, multiply_accumulate_bulk};
use log::{error, info};

/// Deterministic, non-constant `n x n` matrix contents.
pub fn create_matrix_data(n: usize, phase: f64) -> Vec<f64> {
    (0..n * n)
        .map(|i| ((i as f64 * 0.001) + phase).sin())
        .collect()
}

fn time_dgemm<B: NumericBuffer>(
    config: &DgemmConfig,
    n: usize,
    repetitions: u32,
) -> KernelResult<TimingSample> {
    let a = B::filled(n * n, config.a_value)?;
    let b = B::filled(n * n, config.b_value)?;
    let zero = B::zeros(n * n)?;
    measure_with_setup(
        || zero.clone(),
        |c| multiply_accumulate(&a, &b, c, n),
        repetitions,
    )
}

fn time_dgemm_bulk(config: &DgemmConfig, n: usize, repetitions: u32) -> KernelResult<TimingSample> {
    let a = VectorizedBuffer::filled(n * n, config.a_value)?;
    let b = VectorizedBuffer::filled(n * n, config.b_value)?;
    let zero = VectorizedBuffer::zeros(n * n)?;
    measure_with_setup(
        || zero.clone(),
        |c| multiply_accumulate_bulk(&a, &b, c, n),
        repetitions,
    )
}

fn run_sweep<F>(config: &DgemmConfig, method: &str, time: F) -> Vec<SweepPoint<KernelError>>
where
    F: Fn(&DgemmConfig, usize, u32) -> KernelResult<TimingSample>,
{
    sweep(&config.sizes, config.repetitions, |n, repetitions| {
        info!("  {} N={} ({} repetitions)", method, n, repetitions);
        time(config, n, repetitions)
    })
}

/// Runs the DGEMM size sweep for one representation.
pub fn run_representation(
    config: &DgemmConfig,
    representation: Representation,
) -> PerformanceResults {
    let (method, points) = match representation {
        Representation::Dynamic => (
            "dynamic".to_string(),
            run_sweep(config, "dynamic", time_dgemm::<DynamicBuffer>),
        ),
        Representation::Packed => (
            "packed".to_string(),
            run_sweep(config, "packed", time_dgemm::<PackedBuffer>),
        ),
        Representation::Vectorized if config.bulk_vectorized => (
            "vectorized (bulk)".to_string(),
            run_sweep(config, "vectorized (bulk)", time_dgemm_bulk),
        ),
        Representation::Vectorized => (
            "vectorized".to_string(),
            run_sweep(config, "vectorized", time_dgemm::<VectorizedBuffer>),
        ),
    };
    PerformanceResults::from_sweep(method, points, |n, sample| {
        Some(flops(sample.mean_seconds(), n))
    })
}

fn product<B: NumericBuffer>(a: &[f64], b: &[f64], n: usize) -> KernelResult<Vec<f64>> {
    let a = B::from_values(a)?;
    let b = B::from_values(b)?;
    let mut c = B::zeros(n * n)?;
    multiply_accumulate(&a, &b, &mut c, n)?;
    Ok(c.to_vec())
}

/// Checks every kernel path against the packed triple loop at size `n`.
pub fn verify(n: usize) -> BenchmarkResult<()> {
    let a = create_matrix_data(n, 0.0);
    let b = create_matrix_data(n, 1.0);
    let expected = product::<PackedBuffer>(&a, &b, n)?;

    let mut bulk_c = VectorizedBuffer::zeros(n * n)?;
    multiply_accumulate_bulk(
        &VectorizedBuffer::from_values(&a)?,
        &VectorizedBuffer::from_values(&b)?,
        &mut bulk_c,
        n,
    )?;

    let candidates = [
        ("dynamic", product::<DynamicBuffer>(&a, &b, n)?),
        ("vectorized", product::<VectorizedBuffer>(&a, &b, n)?),
        ("vectorized (bulk)", bulk_c.to_vec()),
    ];
    for (method, actual) in candidates {
        if !verify_outputs_match(&expected, &actual) {
            error!("❌ DGEMM {} output differs from packed baseline", method);
            return Err(BenchmarkError::VerificationFailed {
                benchmark_name: "dgemm".to_string(),
                message: format!("{} output differs from packed baseline", method),
            });
        }
    }
    Ok(())
}

/// Verifies, then times every configured representation.
pub fn run(config: &DgemmConfig) -> BenchmarkResult<BenchmarkReport> {
    config.validate()?;

    info!("{}", "=".repeat(80));
    info!("DGEMM Performance Benchmark");
    info!("Matrix sizes: {:?}", config.sizes);
    info!("Representations: {:?}", config.representations);
    info!("{}", "=".repeat(80));

    info!("Verifying output consistency across representations...");
    verify(config.sizes[0])?;
    info!("✅ Outputs match - representations are consistent");

    let results = config
        .representations
        .iter()
        .map(|&representation| run_representation(config, representation))
        .collect();

    Ok(BenchmarkReport {
        benchmark: config.name.clone(),
        description: config.description.clone(),
        throughput_unit: Some("FLOPS".to_string()),
        results,
    })
}
