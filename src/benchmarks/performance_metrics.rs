//! Result verification and reporting for benchmarks.

use super::benchmark_types::{BenchmarkReport, PerformanceResults};
use log::warn;

/// Relative tolerance used when comparing outputs of different representations.
pub const EPSILON: f64 = 1e-9;

/// Verifies that outputs from different implementations match.
///
/// Values are compared with a tolerance of `EPSILON` scaled by the larger
/// magnitude (at least 1), so large accumulated sums are not held to an
/// absolute bound.
pub fn verify_outputs_match(expected: &[f64], actual: &[f64]) -> bool {
    if expected.len() != actual.len() {
        warn!(
            "Output length mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        );
        return false;
    }
    for (i, (&e, &a)) in expected.iter().zip(actual.iter()).enumerate() {
        let scale = e.abs().max(a.abs()).max(1.0);
        if (e - a).abs() > EPSILON * scale {
            warn!(
                "Output mismatch at {}: expected={}, actual={}, diff={}",
                i,
                e,
                a,
                (e - a).abs()
            );
            return false;
        }
    }
    true
}

fn format_throughput(value: Option<f64>, unit: Option<&str>) -> String {
    match (value, unit) {
        (Some(v), Some(unit)) if v.is_finite() => format!("{:.3e} {}", v, unit),
        (Some(_), Some(unit)) => format!("inf {}", unit),
        _ => "-".to_string(),
    }
}

/// Prints detailed performance analysis
pub fn print_performance_analysis(report: &BenchmarkReport) {
    if report.results.is_empty() {
        return;
    }

    let unit = report.throughput_unit.as_deref();

    println!("\n{}", "=".repeat(80));
    println!("Detailed Results: {}", report.benchmark);
    println!("{}", "=".repeat(80));

    for result in &report.results {
        println!("\n📊 {}", result.method);
        println!(
            "   {:>8}  {:>14}  {:>14}  {:>18}",
            "size", "mean (ms)", "std (ms)", "throughput"
        );
        for point in &result.points {
            println!(
                "   {:>8}  {:>14.4}  {:>14.4}  {:>18}",
                point.size,
                point.mean_ms,
                point.std_dev_ms,
                format_throughput(point.throughput, unit)
            );
        }
        for failure in &result.failures {
            println!("   {:>8}  failed: {}", failure.size, failure.message);
        }
    }

    let baseline = &report.results[0];
    if report.results.len() > 1 {
        println!("\n📈 Relative to {} (largest shared size):", baseline.method);
        for result in &report.results[1..] {
            match (
                result.overhead_ratio(baseline),
                result.overhead_percentage(baseline),
            ) {
                (Some(ratio), Some(percentage)) => println!(
                    "   {}: {:.2}x ({:+.1}%)",
                    result.method, ratio, percentage
                ),
                _ => println!("   {}: no shared size", result.method),
            }
        }
    }

    print_speed_rankings(&report.results);
}

fn print_speed_rankings(results: &[PerformanceResults]) {
    let mut ranked: Vec<(&str, f64)> = results
        .iter()
        .filter_map(|r| r.points.last().map(|p| (r.method.as_str(), p.mean_ms)))
        .collect();
    if ranked.is_empty() {
        return;
    }
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    println!("\n🚀 Speed Rankings at largest size (fastest to slowest):");
    for (i, (method, mean_ms)) in ranked.iter().enumerate() {
        let rank_emoji = match i {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "  ",
        };
        println!("   {} {}: {:.3} ms", rank_emoji, method, mean_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_outputs() {
        assert!(verify_outputs_match(&[1.0, 2.0, 1e6], &[1.0, 2.0, 1e6 + 1e-4]));
    }

    #[test]
    fn test_mismatched_outputs() {
        assert!(!verify_outputs_match(&[1.0, 2.0], &[1.0, 2.1]));
        assert!(!verify_outputs_match(&[1.0], &[1.0, 1.0]));
    }
}
