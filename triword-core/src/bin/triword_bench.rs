//! Phrase Tally Benchmarking Tool
//!
//! Measures the throughput of the analysis pipeline on a large text file,
//! e.g. a Project Gutenberg novel or a concatenated corpus.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: lowercasing and punctuation stripping, line by line
//! 2. **Tokenization**: splitting normalized lines into tokens
//! 3. **Tally**: the full per-line pipeline into a fresh `WindowTally`
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/triword_bench /path/to/moby_dick.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Tally ===
//! --------------------------------
//! Mode        : Tally
//! Elapsed     : 0.081 s
//! Throughput  : 0.014 GiB/s
//! Tokens      : 215_830
//! Tokens/sec  : 2_664_567
//! Windows     : 215_828
//! Distinct    : 187_301
//! --------------------------------
//! ```
//!
//! Build with `--release`; debug builds are dominated by contract checks.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use triword_core::analyzer::{TextNormalizer, Tokenizer};
use triword_core::{TallyStats, WindowTally};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: triword_bench <path>");
        std::process::exit(1);
    }

    println!("Loading file...");
    let input = fs::read_to_string(&args[1])?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    bench_normalize(&input);
    bench_tokenize(&input);
    bench_tally(&input);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::default();
    let mut out = String::new();

    println!("=== Normalize ===");

    let run = |out: &mut String| {
        for line in input.lines() {
            normalizer.normalize_into(line, out);
            std::hint::black_box(&*out);
        }
    };

    warmup(|| run(&mut out));
    let elapsed = measure(|| run(&mut out));

    print_perf("Normalize", input.len(), elapsed, 0, 0, 0);
}

fn bench_tokenize(input: &str) {
    let normalizer = TextNormalizer::default();
    let tokenizer = Tokenizer::new();
    let normalized: Vec<String> = input.lines().map(|l| normalizer.normalize(l)).collect();

    println!("=== Tokenize ===");

    let run = || {
        let mut local = 0u64;
        for line in &normalized {
            tokenizer.tokenize(line, |_t, _p| local += 1);
        }
        std::hint::black_box(local)
    };

    warmup(|| {
        run();
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| tokens = run());

    print_perf("Tokenize", input.len(), elapsed, tokens, 0, 0);
}

fn bench_tally(input: &str) {
    println!("=== Tally ===");

    let run = || {
        let mut tally = WindowTally::new();
        for line in input.lines() {
            tally.feed_line(line);
        }
        tally.end_source();
        std::hint::black_box(tally.stats())
    };

    warmup(|| {
        run();
    });

    let mut stats = TallyStats::default();
    let elapsed = measure(|| stats = run());

    print_perf(
        "Tally",
        input.len(),
        elapsed,
        stats.tokens,
        stats.windows,
        stats.distinct_windows,
    );
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(
    label: &str,
    input_bytes: usize,
    elapsed: Duration,
    tokens: u64,
    windows: u64,
    distinct: usize,
) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    if windows > 0 {
        println!("Windows     : {}", fmt_count(windows));
        println!("Distinct    : {}", fmt_count(distinct as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
