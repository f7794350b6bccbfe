//! Error types for benchmark operations.

use crate::errors::KernelError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BenchmarkError {
    ConfigParseError {
        path: String,
        source: serde_json::Error,
    },
    ConfigValidationError {
        field: String,
        message: String,
    },
    IoError {
        source: std::io::Error,
    },
    InvalidProblemSize {
        size: usize,
    },
    InvalidRepetitions {
        value: u32,
    },
    UnknownBenchmark {
        name: String,
    },
    VerificationFailed {
        benchmark_name: String,
        message: String,
    },
    BenchmarkExecutionError {
        benchmark_name: String,
        message: String,
    },
    Kernel {
        source: KernelError,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::ConfigParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration file '{}': {}",
                    path, source
                )
            }
            BenchmarkError::ConfigValidationError { field, message } => {
                write!(
                    f,
                    "Configuration validation error for field '{}': {}",
                    field, message
                )
            }
            BenchmarkError::IoError { source } => {
                write!(f, "IO error: {}", source)
            }
            BenchmarkError::InvalidProblemSize { size } => {
                write!(f, "Invalid problem size: {}. Must be greater than 0", size)
            }
            BenchmarkError::InvalidRepetitions { value } => {
                write!(
                    f,
                    "Invalid number of repetitions: {}. Must be greater than 0",
                    value
                )
            }
            BenchmarkError::UnknownBenchmark { name } => {
                write!(
                    f,
                    "Unknown benchmark '{}'. Supported: dft, dgemm, gauss_seidel, stream",
                    name
                )
            }
            BenchmarkError::VerificationFailed {
                benchmark_name,
                message,
            } => {
                write!(
                    f,
                    "Benchmark '{}' verification failed: {}",
                    benchmark_name, message
                )
            }
            BenchmarkError::BenchmarkExecutionError {
                benchmark_name,
                message,
            } => {
                write!(
                    f,
                    "Benchmark '{}' execution error: {}",
                    benchmark_name, message
                )
            }
            BenchmarkError::Kernel { source } => {
                write!(f, "Kernel error: {}", source)
            }
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchmarkError::ConfigParseError { source, .. } => Some(source),
            BenchmarkError::IoError { source } => Some(source),
            BenchmarkError::Kernel { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchmarkError {
    fn from(error: std::io::Error) -> Self {
        BenchmarkError::IoError { source: error }
    }
}

impl From<KernelError> for BenchmarkError {
    fn from(error: KernelError) -> Self {
        BenchmarkError::Kernel { source: error }
    }
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
