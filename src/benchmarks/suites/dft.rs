use crate::benchmarks::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::benchmarks::benchmark_types::{BenchmarkReport, DftConfig, PerformanceResults};
use crate::benchmarks::performance_metrics::verify_outputs_match;
use crate::buffers::{DynamicBuffer, NumericBuffer, PackedBuffer, Representation, VectorizedBuffer};
use crate::errors::{KernelError, KernelResult};
use crate::harness::{measure, sweep, SweepPoint, TimingSample};
use crate::kernels::dft::{transform, transform_into, DftVariant};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Noise amplitude added to the synthetic test wave.
pub const NOISE_AMPLITUDE: f64 = 0.1;

/// A complex wave with seeded noise, sampled at `n` points of `[0, 1]`.
///
/// Real part `sin(2πt) + e`, imaginary part `cos(2πt) + e`, with the same
/// noise term `e` in both channels.
pub fn create_signal(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    let mut real = Vec::with_capacity(n);
    let mut imag = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 * step;
        let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
        real.push((TAU * t).sin() + noise);
        imag.push((TAU * t).cos() + noise);
    }
    (real, imag)
}

fn time_dft<B: NumericBuffer>(
    config: &DftConfig,
    variant: DftVariant,
    n: usize,
    repetitions: u32,
) -> KernelResult<TimingSample> {
    let (real, imag) = create_signal(n, config.seed);
    let real_in = B::from_values(&real)?;
    let imag_in = B::from_values(&imag)?;
    let mut real_out = B::zeros(n)?;
    let mut imag_out = B::zeros(n)?;
    measure(
        || transform_into(&real_in, &imag_in, &mut real_out, &mut imag_out, variant),
        repetitions,
    )
}

fn run_sweep<B: NumericBuffer>(
    config: &DftConfig,
    method: &str,
    variant: DftVariant,
) -> Vec<SweepPoint<KernelError>> {
    sweep(&config.sizes, config.repetitions, |n, repetitions| {
        info!("  {} N={} ({} repetitions)", method, n, repetitions);
        time_dft::<B>(config, variant, n, repetitions)
    })
}

/// Runs the DFT size sweep for one representation and variant.
pub fn run_representation(
    config: &DftConfig,
    representation: Representation,
    variant: DftVariant,
) -> PerformanceResults {
    let method = format!("{} / {}", representation, variant);
    let points = match representation {
        Representation::Dynamic => run_sweep::<DynamicBuffer>(config, &method, variant),
        Representation::Packed => run_sweep::<PackedBuffer>(config, &method, variant),
        Representation::Vectorized => run_sweep::<VectorizedBuffer>(config, &method, variant),
    };
    PerformanceResults::from_sweep(method, points, |_, _| None)
}

fn spectrum<B: NumericBuffer>(
    real: &[f64],
    imag: &[f64],
    variant: DftVariant,
) -> KernelResult<(Vec<f64>, Vec<f64>)> {
    let (out_re, out_im) = transform(&B::from_values(real)?, &B::from_values(imag)?, variant)?;
    Ok((out_re.to_vec(), out_im.to_vec()))
}

/// Checks both variants on every representation against the packed naive
/// transform of a length-`n` signal.
pub fn verify(n: usize, seed: u64) -> BenchmarkResult<()> {
    let (real, imag) = create_signal(n, seed);
    let (expected_re, expected_im) = spectrum::<PackedBuffer>(&real, &imag, DftVariant::Naive)?;

    for variant in [DftVariant::Naive, DftVariant::Twiddle] {
        let candidates = [
            ("dynamic", spectrum::<DynamicBuffer>(&real, &imag, variant)?),
            ("packed", spectrum::<PackedBuffer>(&real, &imag, variant)?),
            ("vectorized", spectrum::<VectorizedBuffer>(&real, &imag, variant)?),
        ];
        for (method, (actual_re, actual_im)) in candidates {
            if !verify_outputs_match(&expected_re, &actual_re)
                || !verify_outputs_match(&expected_im, &actual_im)
            {
                error!("❌ DFT {} / {} output differs from packed naive", method, variant);
                return Err(BenchmarkError::VerificationFailed {
                    benchmark_name: "dft".to_string(),
                    message: format!("{} / {} output differs from packed naive", method, variant),
                });
            }
        }
    }
    Ok(())
}

/// Verifies, then times every configured representation and variant.
pub fn run(config: &DftConfig) -> BenchmarkResult<BenchmarkReport> {
    config.validate()?;

    info!("{}", "=".repeat(80));
    info!("DFT Performance Benchmark");
    info!("Signal lengths: {:?}", config.sizes);
    info!("Variants: {:?}", config.variants);
    info!("{}", "=".repeat(80));

    info!("Verifying output consistency across representations and variants...");
    verify(config.sizes[0], config.seed)?;
    info!("✅ Outputs match - representations are consistent");

    let mut results = Vec::new();
    for &variant in &config.variants {
        for &representation in &config.representations {
            results.push(run_representation(config, representation, variant));
        }
    }

    Ok(BenchmarkReport {
        benchmark: config.name.clone(),
        description: config.description.clone(),
        throughput_unit: None,
        results,
    })
}
