//! Latency percentiles for per-check-node timings.

use std::time::Duration;

/// Latency statistics with percentiles, in nanoseconds per check node.
#[derive(Debug, Clone, Default)]
pub struct LatencyStats {
    pub avg_ns: f64,
    pub p50_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
}

/// Calculate latency percentiles from per-node durations.
pub fn calculate_percentiles(times: &[Duration]) -> LatencyStats {
    if times.is_empty() {
        return LatencyStats::default();
    }

    let mut ns: Vec<f64> = times.iter().map(|d| d.as_secs_f64() * 1e9).collect();
    ns.sort_by(f64::total_cmp);

    let n = ns.len();
    let at = |q: f64| ns[((n as f64 * q) as usize).min(n - 1)];

    LatencyStats {
        avg_ns: ns.iter().sum::<f64>() / n as f64,
        p50_ns: at(0.50),
        p95_ns: at(0.95),
        p99_ns: at(0.99),
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
