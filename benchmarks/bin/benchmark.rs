//! Main benchmark CLI executable.

use kernel_bench::benchmarks::{BenchmarkResult, BenchmarkRunner};
use log::error;
use std::env;

fn main() {
    // Initialize logger
    env_logger::init();

    let result = run_benchmarks();

    if let Err(e) = result {
        error!("Benchmark execution failed: {}", e);
        std::process::exit(1);
    }
}

fn run_benchmarks() -> BenchmarkResult<()> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            // No arguments - run all benchmarks
            BenchmarkRunner::run_all_benchmarks()
        }
        2 => match args[1].as_str() {
            "--list" => {
                BenchmarkRunner::list_benchmarks();
                Ok(())
            }
            "--help" | "-h" => {
                print_usage();
                Ok(())
            }
            benchmark_name => BenchmarkRunner::run_benchmark(benchmark_name),
        },
        3 => match args[1].as_str() {
            "--benchmark" => BenchmarkRunner::run_benchmark(&args[2]),
            "--json" => BenchmarkRunner::run_benchmark_json(&args[2]),
            _ => {
                print_usage();
                Ok(())
            }
        },
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  cargo run --bin benchmark --release                    # Run all benchmarks");
    println!("  cargo run --bin benchmark --release -- --list         # List available benchmarks");
    println!("  cargo run --bin benchmark --release -- <benchmark>    # Run specific benchmark");
    println!("  cargo run --bin benchmark --release -- --benchmark <benchmark>");
    println!("  cargo run --bin benchmark --release -- --json <benchmark>  # Print report as JSON");
    println!();
    println!("Configuration is read from configs/<benchmark>.json when present.");
    println!("Set RUST_LOG=info for progress output.");
    println!();
    BenchmarkRunner::list_benchmarks();
}
