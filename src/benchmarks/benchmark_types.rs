//! Benchmark type definitions and configuration structures.

use super::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::buffers::Representation;
use crate::harness::{SweepPoint, TimingSample};
use crate::kernels::gauss_seidel::MIN_EXTENT;
use crate::kernels::DftVariant;
use log::error;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Configuration for the DFT benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DftConfig {
    pub name: String,
    pub description: String,
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub representations: Vec<Representation>,
    pub variants: Vec<DftVariant>,
    pub seed: u64,
}

/// Configuration for the DGEMM benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DgemmConfig {
    pub name: String,
    pub description: String,
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub representations: Vec<Representation>,
    /// Time `ndarray`'s native matrix product for the vectorized representation.
    pub bulk_vectorized: bool,
    pub a_value: f64,
    pub b_value: f64,
}

/// Configuration for the Gauss-Seidel benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussSeidelConfig {
    pub name: String,
    pub description: String,
    /// Square grid extents.
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub representations: Vec<Representation>,
    pub iterations: usize,
    pub initial_value: f64,
}

/// Configuration for the STREAM benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub name: String,
    pub description: String,
    /// Buffer lengths in elements.
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub representations: Vec<Representation>,
    /// Use whole-array operations for the vectorized representation.
    pub bulk_vectorized: bool,
    pub scalar: f64,
}

/// Enum representing all available benchmark types
#[derive(Debug, Clone)]
pub enum BenchmarkConfig {
    Dft(DftConfig),
    Dgemm(DgemmConfig),
    GaussSeidel(GaussSeidelConfig),
    Stream(StreamConfig),
}

impl Default for DftConfig {
    fn default() -> Self {
        let mut sizes = vec![8, 16, 32, 64];
        sizes.extend((2..16).map(|i| 64 * i));
        Self {
            name: "dft".to_string(),
            description: "Direct-summation discrete Fourier transform".to_string(),
            sizes,
            repetitions: 10,
            representations: Representation::ALL.to_vec(),
            variants: vec![DftVariant::Naive, DftVariant::Twiddle],
            seed: 42,
        }
    }
}

impl Default for DgemmConfig {
    fn default() -> Self {
        Self {
            name: "dgemm".to_string(),
            description: "Square matrix multiply-accumulate C += A*B".to_string(),
            sizes: vec![16, 32, 64, 128, 192, 256, 320, 384, 448, 512],
            repetitions: 10,
            representations: Representation::ALL.to_vec(),
            bulk_vectorized: true,
            a_value: 1.0,
            b_value: 5.0,
        }
    }
}

impl Default for GaussSeidelConfig {
    fn default() -> Self {
        Self {
            name: "gauss_seidel".to_string(),
            description: "Poisson relaxation sweeps on a square grid".to_string(),
            sizes: vec![8, 16, 32, 64, 128, 256],
            repetitions: 3,
            representations: Representation::ALL.to_vec(),
            iterations: 1000,
            initial_value: 1.0,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "stream".to_string(),
            description: "STREAM copy, scale, sum and triad bandwidth".to_string(),
            sizes: (4..16).map(|i| 1usize << i).collect(),
            repetitions: 100,
            representations: Representation::ALL.to_vec(),
            bulk_vectorized: true,
            scalar: 2.0,
        }
    }
}

/// Checks the fields every benchmark configuration shares.
fn validate_sweep(
    sizes: &[usize],
    repetitions: u32,
    representations: &[Representation],
) -> BenchmarkResult<()> {
    if repetitions == 0 {
        return Err(BenchmarkError::InvalidRepetitions { value: repetitions });
    }

    if sizes.is_empty() {
        return Err(BenchmarkError::ConfigValidationError {
            field: "sizes".to_string(),
            message: "At least one problem size is required".to_string(),
        });
    }

    for &size in sizes {
        if size == 0 {
            return Err(BenchmarkError::InvalidProblemSize { size });
        }
    }

    if sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(BenchmarkError::ConfigValidationError {
            field: "sizes".to_string(),
            message: "Problem sizes must be strictly ascending".to_string(),
        });
    }

    if representations.is_empty() {
        return Err(BenchmarkError::ConfigValidationError {
            field: "representations".to_string(),
            message: "At least one representation is required".to_string(),
        });
    }

    Ok(())
}

impl DftConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        validate_sweep(&self.sizes, self.repetitions, &self.representations)?;
        if self.variants.is_empty() {
            return Err(BenchmarkError::ConfigValidationError {
                field: "variants".to_string(),
                message: "At least one DFT variant is required".to_string(),
            });
        }
        Ok(())
    }
}

impl DgemmConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        validate_sweep(&self.sizes, self.repetitions, &self.representations)?;
        if !self.a_value.is_finite() || !self.b_value.is_finite() {
            return Err(BenchmarkError::ConfigValidationError {
                field: "a_value/b_value".to_string(),
                message: "Matrix fill values must be finite".to_string(),
            });
        }
        Ok(())
    }
}

impl GaussSeidelConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        validate_sweep(&self.sizes, self.repetitions, &self.representations)?;
        if let Some(&size) = self.sizes.iter().find(|&&size| size < MIN_EXTENT) {
            return Err(BenchmarkError::ConfigValidationError {
                field: "sizes".to_string(),
                message: format!(
                    "Grid extent {} leaves no interior; must be at least {}",
                    size, MIN_EXTENT
                ),
            });
        }
        if self.iterations == 0 {
            return Err(BenchmarkError::ConfigValidationError {
                field: "iterations".to_string(),
                message: "Iterations must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl StreamConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        validate_sweep(&self.sizes, self.repetitions, &self.representations)?;
        if !self.scalar.is_finite() {
            return Err(BenchmarkError::ConfigValidationError {
                field: "scalar".to_string(),
                message: "Scalar must be finite".to_string(),
            });
        }
        Ok(())
    }
}

impl BenchmarkConfig {
    /// Gets the benchmark name
    pub fn name(&self) -> &str {
        match self {
            BenchmarkConfig::Dft(config) => &config.name,
            BenchmarkConfig::Dgemm(config) => &config.name,
            BenchmarkConfig::GaussSeidel(config) => &config.name,
            BenchmarkConfig::Stream(config) => &config.name,
        }
    }

    /// Gets the benchmark description
    pub fn description(&self) -> &str {
        match self {
            BenchmarkConfig::Dft(config) => &config.description,
            BenchmarkConfig::Dgemm(config) => &config.description,
            BenchmarkConfig::GaussSeidel(config) => &config.description,
            BenchmarkConfig::Stream(config) => &config.description,
        }
    }

    /// Gets the number of repetitions per problem size
    pub fn repetitions(&self) -> u32 {
        match self {
            BenchmarkConfig::Dft(config) => config.repetitions,
            BenchmarkConfig::Dgemm(config) => config.repetitions,
            BenchmarkConfig::GaussSeidel(config) => config.repetitions,
            BenchmarkConfig::Stream(config) => config.repetitions,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        match self {
            BenchmarkConfig::Dft(config) => config.validate(),
            BenchmarkConfig::Dgemm(config) => config.validate(),
            BenchmarkConfig::GaussSeidel(config) => config.validate(),
            BenchmarkConfig::Stream(config) => config.validate(),
        }
    }
}

/// Timing summary for one problem size
#[derive(Debug, Clone, Serialize)]
pub struct SizeResult {
    pub size: usize,
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    /// FLOPS or bytes per second, when the benchmark defines one.
    pub throughput: Option<f64>,
    pub sample: TimingSample,
}

/// A problem size whose measurement failed
#[derive(Debug, Clone, Serialize)]
pub struct SizeFailure {
    pub size: usize,
    pub message: String,
}

/// Sweep results for one method (representation, kernel path or variant)
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceResults {
    pub method: String,
    pub points: Vec<SizeResult>,
    pub failures: Vec<SizeFailure>,
}

impl PerformanceResults {
    /// Collects a sweep, deriving a throughput figure for every successful size.
    pub fn from_sweep<E, T>(method: String, sweep: Vec<SweepPoint<E>>, throughput: T) -> Self
    where
        E: Display,
        T: Fn(usize, &TimingSample) -> Option<f64>,
    {
        let mut points = Vec::new();
        let mut failures = Vec::new();
        for point in sweep {
            match point.outcome {
                Ok(sample) => points.push(SizeResult {
                    size: point.size,
                    mean_ms: sample.mean_ms(),
                    std_dev_ms: sample.std_dev_ms(),
                    throughput: throughput(point.size, &sample),
                    sample,
                }),
                Err(e) => {
                    error!("❌ {} failed at size {}: {}", method, point.size, e);
                    failures.push(SizeFailure {
                        size: point.size,
                        message: e.to_string(),
                    });
                }
            }
        }
        Self {
            method,
            points,
            failures,
        }
    }

    pub fn point(&self, size: usize) -> Option<&SizeResult> {
        self.points.iter().find(|p| p.size == size)
    }

    /// Largest problem size measured successfully by both result sets.
    fn largest_common_size(&self, other: &PerformanceResults) -> Option<usize> {
        self.points
            .iter()
            .rev()
            .map(|p| p.size)
            .find(|&size| other.point(size).is_some())
    }

    /// Mean time relative to `baseline` at the largest shared size.
    pub fn overhead_ratio(&self, baseline: &PerformanceResults) -> Option<f64> {
        let size = self.largest_common_size(baseline)?;
        let own = self.point(size)?.mean_ms;
        let base = baseline.point(size)?.mean_ms;
        if base <= 0.0 {
            return None;
        }
        Some(own / base)
    }

    pub fn overhead_percentage(&self, baseline: &PerformanceResults) -> Option<f64> {
        self.overhead_ratio(baseline)
            .map(|ratio| (ratio - 1.0) * 100.0)
    }
}

/// Everything one benchmark run produced
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub benchmark: String,
    pub description: String,
    /// Unit of [`SizeResult::throughput`], if any.
    pub throughput_unit: Option<String>,
    pub results: Vec<PerformanceResults>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(DftConfig::default().validate().is_ok());
        assert!(DgemmConfig::default().validate().is_ok());
        assert!(GaussSeidelConfig::default().validate().is_ok());
        assert!(StreamConfig::default().validate().is_ok());
    }

    #[test]
    fn test_stream_default_lengths() {
        let config = StreamConfig::default();
        assert_eq!(config.sizes.first(), Some(&16));
        assert_eq!(config.sizes.last(), Some(&32768));
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let config = DgemmConfig {
            repetitions: 0,
            ..DgemmConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::InvalidRepetitions { value: 0 })
        ));
    }

    #[test]
    fn test_unsorted_sizes_rejected() {
        let config = StreamConfig {
            sizes: vec![64, 16],
            ..StreamConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_grid_without_interior_rejected() {
        let config = GaussSeidelConfig {
            sizes: vec![2, 8],
            ..GaussSeidelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StreamConfig = serde_json::from_str(r#"{"sizes": [8, 16], "scalar": 3.0}"#)
            .expect("partial config should parse");
        assert_eq!(config.sizes, vec![8, 16]);
        assert_eq!(config.scalar, 3.0);
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.name, "stream");
    }

    #[test]
    fn test_from_sweep_splits_failures() {
        let sweep = vec![
            SweepPoint {
                size: 4,
                outcome: Ok(TimingSample::from_nanos(vec![1_000_000, 3_000_000])),
            },
            SweepPoint {
                size: 8,
                outcome: Err("bad size".to_string()),
            },
        ];
        let results = PerformanceResults::from_sweep("packed".to_string(), sweep, |size, _| {
            Some(size as f64)
        });
        assert_eq!(results.points.len(), 1);
        assert_eq!(results.points[0].mean_ms, 2.0);
        assert_eq!(results.points[0].throughput, Some(4.0));
        assert_eq!(results.failures[0].size, 8);
        assert_eq!(results.failures[0].message, "bad size");
    }

    #[test]
    fn test_overhead_ratio_uses_largest_shared_size() {
        let make = |method: &str, times: &[(usize, u64)]| {
            let sweep: Vec<SweepPoint<String>> = times
                .iter()
                .map(|&(size, ns)| SweepPoint {
                    size,
                    outcome: Ok(TimingSample::from_nanos(vec![ns])),
                })
                .collect();
            PerformanceResults::from_sweep(method.to_string(), sweep, |_, _| None)
        };
        let baseline = make("packed", &[(4, 1_000), (8, 2_000)]);
        let slower = make("dynamic", &[(4, 5_000), (8, 8_000), (16, 9_000)]);
        assert_eq!(slower.overhead_ratio(&baseline), Some(4.0));
        assert_eq!(slower.overhead_percentage(&baseline), Some(300.0));
    }
}
