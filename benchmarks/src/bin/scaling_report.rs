//! Standalone scaling report - compares measured growth against each class
//!
//! Times every demo operation at a small and a large N and prints the
//! measured slowdown next to the slowdown its complexity class predicts:
//! - O(1) first_element
//! - O(log N) binary_search
//! - O(N) linear_sum
//! - O(N log N) merge sort on shuffled input
//! - O(N^2) bubble sort on reversed input

use anyhow::Result;
use colored::Colorize;
use complexity_core::time_demo::bubble_sort_in_place;
use complexity_core::{measure_repeated, merge_sort, Complexity, Element, TimeComplexityDemo};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const SMALL_N: usize = 1_000;
const LARGE_N: usize = 8_000;
const RUNS: usize = 20;

fn main() -> Result<()> {
    println!("{}", "  Complexity Scaling Report".bright_cyan().bold());

    println!("\n{}", "Configuration:".bright_yellow());
    println!("  • Small N: {}", format!("{}", SMALL_N).bright_green());
    println!("  • Large N: {}", format!("{}", LARGE_N).bright_green());
    println!("  • Runs per point: {}\n", format!("{}", RUNS).bright_green());

    for complexity in Complexity::ALL {
        let small = time_class(complexity, SMALL_N);
        let large = time_class(complexity, LARGE_N);
        print_results(complexity, small, large);
    }

    println!("{}", "  Report Complete".bright_green().bold());
    Ok(())
}

/// Average nanoseconds for the class's operation at length `n`
fn time_class(complexity: Complexity, n: usize) -> f64 {
    let demo = TimeComplexityDemo::new(n);
    let label = format!("{} n={}", complexity, n);
    let target = n as Element - 1;

    let stats = match complexity {
        Complexity::Constant => measure_repeated(&label, RUNS, || demo.first_element()).1,
        Complexity::Logarithmic => {
            measure_repeated(&label, RUNS, || demo.binary_search(target)).1
        }
        Complexity::Linear => measure_repeated(&label, RUNS, || demo.linear_sum()).1,
        Complexity::Linearithmic => {
            let input = shuffled(n);
            measure_repeated(&label, RUNS, || merge_sort(&input)).1
        }
        Complexity::Quadratic => {
            let mut reversed = demo.sequence().to_vec();
            reversed.reverse();
            measure_repeated(&label, RUNS, || {
                let mut copy = reversed.clone();
                bubble_sort_in_place(&mut copy);
                copy
            })
            .1
        }
    };

    stats.avg_ms * 1_000_000.0
}

/// Shuffled `[0, n)` so merge sort does real work
fn shuffled(n: usize) -> Vec<Element> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<Element> = (0..n as Element).collect();
    values.shuffle(&mut rng);
    values
}

fn print_results(complexity: Complexity, small_ns: f64, large_ns: f64) {
    let measured = if small_ns > 0.0 { large_ns / small_ns } else { 0.0 };
    let expected = complexity.expected_ratio(SMALL_N, LARGE_N);

    println!("  {}", complexity.notation().bright_white().bold());
    println!(
        "    {}: {} -> {}",
        "Latency (avg)".bright_white(),
        format_latency(small_ns).bright_green(),
        format_latency(large_ns).bright_green().bold()
    );
    println!(
        "    {}: {} (expected ~{})",
        "Growth".bright_white(),
        format!("{:.2}x", measured).bright_cyan().bold(),
        format!("{:.2}x", expected).bright_yellow()
    );
    println!();
}

fn format_latency(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.2} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} μs", ns / 1_000.0)
    } else {
        format!("{:.2} ms", ns / 1_000_000.0)
    }
}
