//! Core benchmark execution logic.

use super::benchmark_errors::{BenchmarkError, BenchmarkResult};
use super::benchmark_types::{
    BenchmarkConfig, BenchmarkReport, DftConfig, DgemmConfig, GaussSeidelConfig, StreamConfig,
};
use super::performance_metrics::print_performance_analysis;
use super::suites;
use log::{error, info, warn};
use std::fs;
use std::io::ErrorKind;

/// Benchmark names accepted by [`BenchmarkRunner::run_benchmark`], in run order.
pub const BENCHMARK_NAMES: [&str; 4] = ["dft", "dgemm", "gauss_seidel", "stream"];

/// Configuration loader that handles JSON files with fallbacks
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file with fallback to defaults
    ///
    /// Only a missing file falls back; any other read error is returned.
    pub fn load_config<T>(path: &str, config_name: &str) -> BenchmarkResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| BenchmarkError::ConfigParseError {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration for {}",
                    path, config_name
                );
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_dft_config() -> BenchmarkResult<DftConfig> {
        Self::load_config("configs/dft.json", "dft")
    }

    pub fn load_dgemm_config() -> BenchmarkResult<DgemmConfig> {
        Self::load_config("configs/dgemm.json", "dgemm")
    }

    pub fn load_gauss_seidel_config() -> BenchmarkResult<GaussSeidelConfig> {
        Self::load_config("configs/gauss_seidel.json", "gauss_seidel")
    }

    pub fn load_stream_config() -> BenchmarkResult<StreamConfig> {
        Self::load_config("configs/stream.json", "stream")
    }

    /// Load the configuration of a benchmark by name
    pub fn load(benchmark_name: &str) -> BenchmarkResult<BenchmarkConfig> {
        let config = match benchmark_name {
            "dft" => BenchmarkConfig::Dft(Self::load_dft_config()?),
            "dgemm" => BenchmarkConfig::Dgemm(Self::load_dgemm_config()?),
            "gauss_seidel" => BenchmarkConfig::GaussSeidel(Self::load_gauss_seidel_config()?),
            "stream" => BenchmarkConfig::Stream(Self::load_stream_config()?),
            _ => {
                return Err(BenchmarkError::UnknownBenchmark {
                    name: benchmark_name.to_string(),
                })
            }
        };
        Ok(config)
    }
}

/// Main benchmark runner
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run all available benchmarks
    pub fn run_all_benchmarks() -> BenchmarkResult<()> {
        info!("Starting comprehensive benchmark suite");

        let mut errors = Vec::new();

        for name in BENCHMARK_NAMES {
            if let Err(e) = Self::run_benchmark(name) {
                error!("{} benchmark failed: {}", name, e);
                errors.push(e);
            }
        }

        if errors.is_empty() {
            info!("All benchmarks completed successfully");
            Ok(())
        } else {
            Err(BenchmarkError::BenchmarkExecutionError {
                benchmark_name: "all".to_string(),
                message: format!("Some benchmarks failed: {} errors", errors.len()),
            })
        }
    }

    /// Run a specific benchmark by name and print its analysis
    pub fn run_benchmark(benchmark_name: &str) -> BenchmarkResult<()> {
        let report = Self::execute(&ConfigLoader::load(benchmark_name)?)?;
        print_performance_analysis(&report);

        println!("\n{}", "=".repeat(80));
        println!("Benchmark Complete");
        println!("{}", "=".repeat(80));

        Ok(())
    }

    /// Run a specific benchmark by name and print its report as JSON
    pub fn run_benchmark_json(benchmark_name: &str) -> BenchmarkResult<()> {
        let report = Self::execute(&ConfigLoader::load(benchmark_name)?)?;
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            BenchmarkError::BenchmarkExecutionError {
                benchmark_name: benchmark_name.to_string(),
                message: format!("Failed to serialize report: {}", e),
            }
        })?;
        println!("{}", json);
        Ok(())
    }

    /// Run a benchmark from an already loaded configuration.
    ///
    /// Each suite validates the configuration before doing any work.
    pub fn execute(config: &BenchmarkConfig) -> BenchmarkResult<BenchmarkReport> {
        info!(
            "Running '{}' ({} repetitions per size): {}",
            config.name(),
            config.repetitions(),
            config.description()
        );

        let report = match config {
            BenchmarkConfig::Dft(config) => suites::dft::run(config)?,
            BenchmarkConfig::Dgemm(config) => suites::dgemm::run(config)?,
            BenchmarkConfig::GaussSeidel(config) => suites::gauss_seidel::run(config)?,
            BenchmarkConfig::Stream(config) => suites::stream::run(config)?,
        };

        let failures: usize = report.results.iter().map(|r| r.failures.len()).sum();
        if failures > 0 {
            warn!("{} problem sizes failed in '{}'", failures, report.benchmark);
        }
        Ok(report)
    }

    /// List available benchmarks
    pub fn list_benchmarks() {
        println!("Available benchmarks:");
        println!("  dft          - Direct-summation DFT, naive and twiddle-cached");
        println!("  dgemm        - Square matrix multiply-accumulate");
        println!("  gauss_seidel - Poisson relaxation sweeps");
        println!("  stream       - STREAM copy/scale/sum/triad bandwidth");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let config: StreamConfig =
            ConfigLoader::load_config("configs/does_not_exist.json", "stream").unwrap();
        assert_eq!(config.scalar, 2.0);
    }

    #[test]
    fn test_unreadable_config_is_an_io_error() {
        // A directory exists but cannot be read as a file.
        let result: BenchmarkResult<StreamConfig> = ConfigLoader::load_config("configs", "stream");
        assert!(matches!(result, Err(BenchmarkError::IoError { .. })));
    }

    #[test]
    fn test_execute_rejects_invalid_config() {
        let config = BenchmarkConfig::Stream(StreamConfig {
            repetitions: 0,
            ..StreamConfig::default()
        });
        assert!(matches!(
            BenchmarkRunner::execute(&config),
            Err(BenchmarkError::InvalidRepetitions { value: 0 })
        ));
    }

    #[test]
    fn test_unknown_benchmark_name() {
        assert!(matches!(
            ConfigLoader::load("fft"),
            Err(BenchmarkError::UnknownBenchmark { .. })
        ));
    }

    #[test]
    fn test_execute_small_config() {
        let config = BenchmarkConfig::Dgemm(DgemmConfig {
            sizes: vec![3],
            repetitions: 1,
            ..DgemmConfig::default()
        });
        let report = BenchmarkRunner::execute(&config).unwrap();
        assert_eq!(report.benchmark, "dgemm");
        assert_eq!(report.throughput_unit.as_deref(), Some("FLOPS"));
    }
}
