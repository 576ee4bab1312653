//! Time complexity demonstrations
//!
//! Five operations over `[0, 1, ..., N-1]`, one per growth class:
//! - `first_element`  O(1)
//! - `binary_search`  O(log N)
//! - `linear_sum`     O(N)
//! - `sort_array`     O(N log N)
//! - `bubble_sort`    O(N^2)

use crate::complexity::Complexity;
use crate::sequence::{base_sequence, Element};
use crate::timing::{measure_repeated, measure_time_with, timing_line, TimingStats};
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;

/// Time complexity demo over a fixed ascending sequence
#[derive(Debug, Clone)]
pub struct TimeComplexityDemo {
    n: usize,
    sequence: Vec<Element>,
}

impl TimeComplexityDemo {
    /// Create a demo over `[0, 1, ..., n-1]`
    pub fn new(n: usize) -> Self {
        Self {
            n,
            sequence: base_sequence(n),
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn sequence(&self) -> &[Element] {
        &self.sequence
    }

    /// O(1): element at index 0, `None` for an empty sequence
    pub fn first_element(&self) -> Option<Element> {
        self.sequence.first().copied()
    }

    /// O(log N): iterative binary search over the ascending sequence
    pub fn binary_search(&self, target: Element) -> Option<usize> {
        let (mut low, mut high) = (0, self.sequence.len());
        while low < high {
            let mid = low + (high - low) / 2;
            match self.sequence[mid].cmp(&target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }

    /// O(N): single pass sum
    pub fn linear_sum(&self) -> Element {
        let mut sum = 0;
        for value in &self.sequence {
            sum += value;
        }
        sum
    }

    /// O(N log N): sorted copy using the standard library's comparison sort
    pub fn sort_array(&self) -> Vec<Element> {
        let mut copy = self.sequence.clone();
        copy.sort();
        copy
    }

    /// O(N^2): sorted copy using adjacent swaps
    ///
    /// Passes repeat until one completes without a swap, so an already
    /// sorted input finishes after a single pass.
    pub fn bubble_sort(&self) -> Vec<Element> {
        let mut copy = self.sequence.clone();
        bubble_sort_in_place(&mut copy);
        copy
    }

    /// Time all five operations, logging one line per operation
    pub fn run(&self, target: Element) -> TimeReport {
        self.run_repeated(target, 1)
    }

    /// Like [`run`](Self::run), additionally collecting statistics over
    /// `runs` repetitions when `runs > 1`
    pub fn run_repeated(&self, target: Element, runs: usize) -> TimeReport {
        let search_label = format!("O(log N) binary_search (target = {})", target);
        let measurements = vec![
            time_operation("O(1) first_element", Complexity::Constant, runs, || {
                self.first_element()
            }),
            time_operation(&search_label, Complexity::Logarithmic, runs, || {
                self.binary_search(target)
            }),
            time_operation("O(N) linear_sum", Complexity::Linear, runs, || {
                self.linear_sum()
            }),
            time_operation("O(N log N) sort_array", Complexity::Linearithmic, runs, || {
                self.sort_array()
            }),
            time_operation("O(N^2) bubble_sort", Complexity::Quadratic, runs, || {
                self.bubble_sort()
            }),
        ];

        TimeReport {
            n: self.n,
            measurements,
        }
    }
}

fn time_operation<T, F>(label: &str, complexity: Complexity, runs: usize, mut f: F) -> Measurement
where
    F: FnMut() -> T,
{
    let timed = measure_time_with(label, &mut f);
    let mut measurement = Measurement::new(label, complexity, timed.elapsed);
    if runs > 1 {
        let (_, stats) = measure_repeated(label, runs, f);
        measurement.stats = Some(stats);
    }
    measurement
}

/// Sort `values` ascending with repeated adjacent-swap passes
///
/// Returns the number of passes made, including the final swap-free one.
pub fn bubble_sort_in_place<T: PartialOrd>(values: &mut [T]) -> usize {
    let mut passes = 0;
    let mut swapped = true;
    while swapped {
        swapped = false;
        passes += 1;
        for i in 1..values.len() {
            if values[i - 1] > values[i] {
                values.swap(i - 1, i);
                swapped = true;
            }
        }
    }
    passes
}

/// One timed operation
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub label: String,
    pub complexity: Complexity,
    pub elapsed: Duration,
    /// Repeated-run statistics, present when more than one run was requested
    pub stats: Option<TimingStats>,
}

impl Measurement {
    pub fn new(label: impl Into<String>, complexity: Complexity, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            complexity,
            elapsed,
            stats: None,
        }
    }

    /// `"<label> took <ms> ms"`
    pub fn line(&self) -> String {
        timing_line(&self.label, self.elapsed)
    }
}

/// Measurements for one run of the time demo, slowest class last
#[derive(Debug, Clone, Serialize)]
pub struct TimeReport {
    pub n: usize,
    pub measurements: Vec<Measurement>,
}

impl TimeReport {
    pub fn get(&self, complexity: Complexity) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.complexity == complexity)
    }

    pub fn total(&self) -> Duration {
        self.measurements.iter().map(|m| m.elapsed).sum()
    }
}
