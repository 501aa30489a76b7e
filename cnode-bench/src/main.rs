//! Check-node kernel benchmark.
//!
//! Times `finalp` of every algorithm on quantized (`i8`, 32 lanes) and
//! floating (`f32`, 8 lanes) messages for several check-node degrees.
//! Outputs per-node timing percentiles (avg, p50, p95, p99) in console
//! tables, together with each kernel's error against exact sum-product and a
//! verification of the linear exclusive reduction.

mod logging;
mod messages;
mod stats;
mod verification;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info, warn};

use cnode_core::{
    Algorithm, MinSum, MinSumC, NormalUpdate, OffsetMinSum, Simd, FACTOR_FLOAT, FACTOR_I8,
    MAX_DEGREE,
};

use crate::messages::{channel_llrs, dequantize, pack, quantize};
use crate::stats::{calculate_percentiles, format_number, LatencyStats};
use crate::verification::{accuracy, verify_reduction, Accuracy};

const Q_LANES: usize = 32;
const F_LANES: usize = 8;

/// Check nodes per timing sample.
const CHUNK: usize = 64;
/// Check nodes run before timing starts.
const WARMUP: usize = 256;

type Q = Simd<i8, Q_LANES>;
type F = Simd<f32, F_LANES>;

#[derive(Parser, Debug)]
#[command(name = "cnode-bench")]
#[command(about = "Benchmark and verify LDPC check-node kernels")]
struct Args {
    /// Check-node degrees to benchmark
    #[arg(long, num_args = 1.., default_values_t = vec![4, 6, 8, 16, 30])]
    degrees: Vec<usize>,

    /// Check nodes per kernel and degree
    #[arg(long, default_value_t = 20_000)]
    trials: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Channel noise standard deviation (BPSK over AWGN)
    #[arg(long, default_value_t = 0.8)]
    sigma: f64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Results for one kernel at one degree.
struct KernelResults {
    name: &'static str,
    lanes: usize,
    stats: LatencyStats,
    accuracy: Accuracy,
}

/// Results for one degree.
struct DegreeResults {
    degree: usize,
    reduction_verified: usize,
    reduction_checked: usize,
    kernels: Vec<KernelResults>,
}

fn run_kernel<A, T, const W: usize>(
    name: &'static str,
    nodes: &[Vec<Simd<T, W>>],
    to_llr: impl Fn(T) -> f64,
) -> KernelResults
where
    A: Algorithm<Msg = Simd<T, W>>,
    T: Copy,
{
    for node in nodes.iter().take(WARMUP) {
        let mut links = node.clone();
        A::finalp(&mut links);
        std::hint::black_box(&links);
    }

    let mut outputs: Vec<Vec<Simd<T, W>>> = nodes.to_vec();
    let mut times = Vec::with_capacity(outputs.len().div_ceil(CHUNK));
    for chunk in outputs.chunks_mut(CHUNK) {
        let t0 = Instant::now();
        for links in chunk.iter_mut() {
            A::finalp(std::hint::black_box(links));
        }
        times.push(t0.elapsed() / chunk.len() as u32);
    }

    let stats = calculate_percentiles(&times);
    let accuracy = accuracy(nodes, &outputs, to_llr);
    debug!(kernel = name, samples = times.len(), avg_ns = stats.avg_ns, "kernel finished");

    KernelResults {
        name,
        lanes: W,
        stats,
        accuracy,
    }
}

fn run_degree(degree: usize, args: &Args) -> anyhow::Result<DegreeResults> {
    let seed = args.seed ^ (degree as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);

    let q_llrs = channel_llrs(args.trials * degree * Q_LANES, args.sigma, seed)?;
    let q_nodes = pack::<i8, Q_LANES>(&q_llrs, degree, quantize);
    let f_llrs = channel_llrs(args.trials * degree * F_LANES, args.sigma, seed.wrapping_add(1))?;
    let f_nodes = pack::<f32, F_LANES>(&f_llrs, degree, |x| x);
    info!(degree, quantized = q_nodes.len(), floating = f_nodes.len(), "generated check nodes");

    let reduction_verified = verify_reduction(&q_nodes);
    if reduction_verified != q_nodes.len() {
        warn!(
            degree,
            failed = q_nodes.len() - reduction_verified,
            "exclusive reduction disagrees with direct method"
        );
    }

    let kernels = vec![
        run_kernel::<MinSum<Q, NormalUpdate>, i8, Q_LANES>("min-sum", &q_nodes, dequantize),
        run_kernel::<MinSumC<Q, NormalUpdate, FACTOR_I8>, i8, Q_LANES>(
            "min-sum-c",
            &q_nodes,
            dequantize,
        ),
        run_kernel::<OffsetMinSum<Q, NormalUpdate, 1>, i8, Q_LANES>(
            "offset-min-sum",
            &q_nodes,
            dequantize,
        ),
        run_kernel::<MinSum<F, NormalUpdate>, f32, F_LANES>("min-sum", &f_nodes, f64::from),
        run_kernel::<MinSumC<F, NormalUpdate, FACTOR_FLOAT>, f32, F_LANES>(
            "min-sum-c",
            &f_nodes,
            f64::from,
        ),
        run_kernel::<OffsetMinSum<F, NormalUpdate, 1>, f32, F_LANES>(
            "offset-min-sum",
            &f_nodes,
            f64::from,
        ),
    ];

    Ok(DegreeResults {
        degree,
        reduction_verified,
        reduction_checked: q_nodes.len(),
        kernels,
    })
}

fn print_results_for_degree(r: &DegreeResults, trials: usize) {
    println!();
    println!("{}", "=".repeat(78));
    println!(
        "Results: degree {} | {} check nodes per kernel",
        r.degree,
        format_number(trials)
    );
    println!("{}", "=".repeat(78));

    println!("\nLatency per check node (nanoseconds) and error vs sum-product:");
    println!(
        "{:-<16}+{:-<7}+{:-<10}+{:-<10}+{:-<10}+{:-<10}+{:-<8}+{:-<8}",
        "", "", "", "", "", "", "", ""
    );
    println!(
        "{:>16}|{:>7}|{:>10}|{:>10}|{:>10}|{:>10}|{:>8}|{:>8}",
        "Kernel", "Lanes", "avg", "p50", "p95", "p99", "MAE", "Sign %"
    );
    println!(
        "{:-<16}+{:-<7}+{:-<10}+{:-<10}+{:-<10}+{:-<10}+{:-<8}+{:-<8}",
        "", "", "", "", "", "", "", ""
    );
    for k in &r.kernels {
        println!(
            "{:>16}|{:>7}|{:>10.1}|{:>10.1}|{:>10.1}|{:>10.1}|{:>8.3}|{:>7.2}%",
            k.name,
            k.lanes,
            k.stats.avg_ns,
            k.stats.p50_ns,
            k.stats.p95_ns,
            k.stats.p99_ns,
            k.accuracy.mae,
            100.0 * k.accuracy.sign_agreement,
        );
    }
    println!(
        "{:-<16}+{:-<7}+{:-<10}+{:-<10}+{:-<10}+{:-<10}+{:-<8}+{:-<8}",
        "", "", "", "", "", "", "", ""
    );

    let pct = if r.reduction_checked > 0 {
        100.0 * r.reduction_verified as f64 / r.reduction_checked as f64
    } else {
        0.0
    };
    println!(
        "\nExclusive reduction vs direct: {:.2}% ({}/{})",
        pct,
        format_number(r.reduction_verified),
        format_number(r.reduction_checked)
    );
}

fn print_summary(all_results: &[DegreeResults]) {
    println!();
    println!("{}", "=".repeat(78));
    println!("SUMMARY ACROSS ALL DEGREES");
    println!("{}", "=".repeat(78));

    let checked: usize = all_results.iter().map(|r| r.reduction_checked).sum();
    let verified: usize = all_results.iter().map(|r| r.reduction_verified).sum();

    println!();
    for r in all_results {
        let best = r.kernels.iter().min_by(|a, b| a.accuracy.mae.total_cmp(&b.accuracy.mae));
        let fastest = r.kernels.iter().min_by(|a, b| {
            let per_lane = |k: &KernelResults| k.stats.avg_ns / k.lanes as f64;
            per_lane(a).total_cmp(&per_lane(b))
        });
        if let (Some(best), Some(fastest)) = (best, fastest) {
            println!(
                "degree {:>2}: most accurate {} ({} lanes, MAE {:.3}), fastest per lane {} ({} lanes, {:.2} ns)",
                r.degree,
                best.name,
                best.lanes,
                best.accuracy.mae,
                fastest.name,
                fastest.lanes,
                fastest.stats.avg_ns / fastest.lanes as f64,
            );
        }
    }

    println!();
    if verified == checked {
        println!(
            "Exclusive reduction matched the direct method on all {} check nodes.",
            format_number(checked)
        );
    } else {
        println!(
            "WARNING: exclusive reduction disagreed on {} of {} check nodes.",
            format_number(checked - verified),
            format_number(checked)
        );
    }
}

/// Writes the per-degree progress prefix and flushes it.
fn progress(out: &mut impl Write, degree: usize) -> io::Result<()> {
    write!(out, "  Degree {degree}... ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    if args.trials == 0 {
        bail!("--trials must be at least 1");
    }
    if !(args.sigma > 0.0) {
        bail!("--sigma must be positive, got {}", args.sigma);
    }
    if let Some(&d) = args.degrees.iter().find(|&&d| !(2..=MAX_DEGREE).contains(&d)) {
        bail!("degree {d} outside supported range 2..={MAX_DEGREE}");
    }

    println!("Benchmark: LDPC check-node kernels");
    println!("Degrees: {:?}", args.degrees);
    println!("Check nodes per kernel: {}", format_number(args.trials));
    println!("Channel: BPSK over AWGN, sigma = {}", args.sigma);
    info!(seed = args.seed, q_lanes = Q_LANES, f_lanes = F_LANES, "starting");

    let mut all_results = Vec::with_capacity(args.degrees.len());
    let started = Instant::now();
    for &degree in &args.degrees {
        progress(&mut io::stdout(), degree)?;
        let results = run_degree(degree, &args)?;
        println!("done");
        all_results.push(results);
    }
    info!(elapsed = ?round_ms(started.elapsed()), "all degrees finished");

    for r in &all_results {
        print_results_for_degree(r, args.trials);
    }
    print_summary(&all_results);
    Ok(())
}

fn round_ms(d: Duration) -> Duration {
    Duration::from_millis(d.as_millis() as u64)
}
