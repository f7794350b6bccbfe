use crate::benchmarks::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::benchmarks::benchmark_types::{BenchmarkReport, GaussSeidelConfig, PerformanceResults};
use crate::benchmarks::performance_metrics::verify_outputs_match;
use crate::buffers::{
    DynamicBuffer, NumericBuffer, PackedBuffer, Representation, ScalarField, VectorizedBuffer,
};
use crate::errors::{KernelError, KernelResult};
use crate::harness::{measure_with_setup, sweep, SweepPoint, TimingSample};
use crate::kernels::gauss_seidel::{relax_iterations, relax_iterations_into};
use log::{error, info};

/// Square grid with a uniform interior and a non-uniform boundary.
///
/// The top row rises linearly from 0 to 1 and the left column holds 0.5, so
/// relaxation has something to smooth.
pub fn create_field<B: NumericBuffer>(size: usize, interior: f64) -> KernelResult<ScalarField<B>> {
    let mut field = ScalarField::filled(size, size, interior)?;
    let last = (size - 1).max(1) as f64;
    for j in 0..size {
        field.set(0, j, j as f64 / last);
    }
    for i in 1..size {
        field.set(i, 0, 0.5);
    }
    Ok(field)
}

fn time_relax<B: NumericBuffer>(
    config: &GaussSeidelConfig,
    size: usize,
    repetitions: u32,
) -> KernelResult<TimingSample> {
    let initial = ScalarField::<B>::filled(size, size, config.initial_value)?;
    measure_with_setup(
        || (initial.clone(), initial.clone()),
        |(field, scratch): &mut (ScalarField<B>, ScalarField<B>)| {
            relax_iterations_into(field, scratch, config.iterations)
        },
        repetitions,
    )
}

fn run_sweep<B: NumericBuffer>(
    config: &GaussSeidelConfig,
    method: &str,
) -> Vec<SweepPoint<KernelError>> {
    sweep(&config.sizes, config.repetitions, |size, repetitions| {
        info!(
            "  {} {}x{} grid, {} iterations ({} repetitions)",
            method, size, size, config.iterations, repetitions
        );
        time_relax::<B>(config, size, repetitions)
    })
}

/// Runs the Gauss-Seidel size sweep for one representation.
pub fn run_representation(
    config: &GaussSeidelConfig,
    representation: Representation,
) -> PerformanceResults {
    let method = representation.to_string();
    let points = match representation {
        Representation::Dynamic => run_sweep::<DynamicBuffer>(config, &method),
        Representation::Packed => run_sweep::<PackedBuffer>(config, &method),
        Representation::Vectorized => run_sweep::<VectorizedBuffer>(config, &method),
    };
    PerformanceResults::from_sweep(method, points, |_, _| None)
}

fn relaxed<B: NumericBuffer>(size: usize, iterations: usize) -> KernelResult<Vec<f64>> {
    let field = create_field::<B>(size, 0.0)?;
    Ok(relax_iterations(&field, iterations)?.into_buffer().to_vec())
}

/// Checks every representation against packed storage on a `size x size` grid.
pub fn verify(size: usize, iterations: usize) -> BenchmarkResult<()> {
    let expected = relaxed::<PackedBuffer>(size, iterations)?;
    let candidates = [
        ("dynamic", relaxed::<DynamicBuffer>(size, iterations)?),
        ("vectorized", relaxed::<VectorizedBuffer>(size, iterations)?),
    ];
    for (method, actual) in candidates {
        if !verify_outputs_match(&expected, &actual) {
            error!("❌ Gauss-Seidel {} output differs from packed baseline", method);
            return Err(BenchmarkError::VerificationFailed {
                benchmark_name: "gauss_seidel".to_string(),
                message: format!("{} output differs from packed baseline", method),
            });
        }
    }
    Ok(())
}

/// Verifies, then times every configured representation.
pub fn run(config: &GaussSeidelConfig) -> BenchmarkResult<BenchmarkReport> {
    config.validate()?;

    info!("{}", "=".repeat(80));
    info!("Gauss-Seidel Performance Benchmark");
    info!("Grid sizes: {:?}", config.sizes);
    info!("Iterations per run: {}", config.iterations);
    info!("{}", "=".repeat(80));

    info!("Verifying output consistency across representations...");
    verify(config.sizes[0], config.iterations.min(50))?;
    info!("✅ Outputs match - representations are consistent");

    let results = config
        .representations
        .iter()
        .map(|&representation| run_representation(config, representation))
        .collect();

    Ok(BenchmarkReport {
        benchmark: config.name.clone(),
        description: config.description.clone(),
        throughput_unit: None,
        results,
    })
}
