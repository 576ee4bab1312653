//! Space complexity demonstrations
//!
//! Five operations whose auxiliary memory grows by class:
//! - `constant_space_operation`   O(1)    one accumulator
//! - `log_n_space_operation`      O(log N) recursion depth of a binary search
//! - `linear_space_operation`     O(N)    one new sequence
//! - `merge_sort_operation`       O(N) peak, O(N log N) total volume
//! - `quadratic_space_operation`  O(N^2)  an N x N matrix
//!
//! Merge sort is the contested one. At any instant at most `2N` elements
//! are live (both sorted halves plus the merge output), so the peak is O(N).
//! Summed over the whole call tree every level allocates `N` elements across
//! `log2 N` levels, so the total allocation volume is O(N log N). Both figures
//! are reported by [`merge_sort_traced`].

use crate::sequence::{base_sequence, index_or_sentinel, Element};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::info;

/// Number of elements copied into each [`SpaceReport`] sample
pub const DEFAULT_SAMPLE_LEN: usize = 10;

/// Space complexity demo over a fixed ascending sequence
#[derive(Debug, Clone)]
pub struct SpaceComplexityDemo {
    n: usize,
    sequence: Vec<Element>,
}

impl SpaceComplexityDemo {
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

    /// O(1) space: sum with a single accumulator
    pub fn constant_space_operation(&self) -> Element {
        let mut sum = 0;
        for value in &self.sequence {
            sum += value;
        }
        sum
    }

    /// O(log N) space: recursive binary search
    ///
    /// Each call adds one stack frame; the range halves per call so the depth
    /// is bounded by `floor(log2 N) + 2`.
    pub fn log_n_space_operation(&self, target: Element) -> Option<usize> {
        self.log_n_space_operation_traced(target).0
    }

    /// Recursive binary search that also reports the deepest call reached
    pub fn log_n_space_operation_traced(&self, target: Element) -> (Option<usize>, usize) {
        let mut max_depth = 0;
        let found = search_recursive(
            &self.sequence,
            0,
            self.sequence.len(),
            target,
            1,
            &mut max_depth,
        );
        (found, max_depth)
    }

    /// O(N) space: new sequence where every element is doubled
    pub fn linear_space_operation(&self) -> Vec<Element> {
        let mut doubled = Vec::with_capacity(self.sequence.len());
        for value in &self.sequence {
            doubled.push(value * 2);
        }
        doubled
    }

    /// Merge sort of the demo's own sequence
    pub fn merge_sort_operation(&self) -> Vec<Element> {
        merge_sort(&self.sequence)
    }

    /// O(N^2) space: N x N matrix of zeros
    pub fn quadratic_space_operation(&self) -> Vec<Vec<Element>> {
        let mut matrix = Vec::with_capacity(self.n);
        for _ in 0..self.n {
            matrix.push(vec![0; self.n]);
        }
        matrix
    }

    /// Run all five operations and keep the first `sample_len` values of each
    ///
    /// Emits the report as one structured log event.
    pub fn report(&self, target: Element, sample_len: usize) -> SpaceReport {
        let const_result = self.constant_space_operation();
        let log_n_result = index_or_sentinel(self.log_n_space_operation(target));
        let new_array = self.linear_space_operation();
        let sorted_array = self.merge_sort_operation();
        let matrix = self.quadratic_space_operation();

        let report = SpaceReport {
            const_result,
            log_n_result,
            new_array_sample: sample(&new_array, sample_len),
            sorted_array_sample: sample(&sorted_array, sample_len),
            matrix_sample: matrix.first().map(|row| sample(row, sample_len)),
        };

        info!(
            const_result = report.const_result,
            log_n_result = report.log_n_result,
            new_array_sample = ?report.new_array_sample,
            sorted_array_sample = ?report.sorted_array_sample,
            matrix_sample = ?report.matrix_sample,
            "space complexity results"
        );

        report
    }
}

fn sample(values: &[Element], len: usize) -> Vec<Element> {
    values.iter().take(len).copied().collect()
}

/// Half-open `[low, high)` recursive binary search
fn search_recursive(
    values: &[Element],
    low: usize,
    high: usize,
    target: Element,
    depth: usize,
    max_depth: &mut usize,
) -> Option<usize> {
    *max_depth = (*max_depth).max(depth);
    if low >= high {
        return None;
    }

    let mid = low + (high - low) / 2;
    match values[mid].cmp(&target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_recursive(values, mid + 1, high, target, depth + 1, max_depth),
        Ordering::Greater => search_recursive(values, low, mid, target, depth + 1, max_depth),
    }
}

/// Sampled output of one space demo run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceReport {
    pub const_result: Element,
    /// Index found by the recursive search, `-1` when absent
    pub log_n_result: i64,
    pub new_array_sample: Vec<Element>,
    pub sorted_array_sample: Vec<Element>,
    /// First row of the matrix, `None` when N is 0
    pub matrix_sample: Option<Vec<Element>>,
}

/// Element counters observed while merge sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AllocationTrace {
    /// Elements currently allocated
    pub live: usize,
    /// Most elements allocated at the same time
    pub peak: usize,
    /// Every element ever allocated, freed or not
    pub total: usize,
}

/// Receives allocation events from the merge sort recursion
trait AllocationObserver {
    fn allocated(&mut self, elements: usize);
    fn released(&mut self, elements: usize);
}

impl AllocationObserver for () {
    fn allocated(&mut self, _elements: usize) {}
    fn released(&mut self, _elements: usize) {}
}

impl AllocationObserver for AllocationTrace {
    fn allocated(&mut self, elements: usize) {
        self.live += elements;
        self.total += elements;
        self.peak = self.peak.max(self.live);
    }

    fn released(&mut self, elements: usize) {
        self.live -= elements;
    }
}

/// Stable merge sort returning a newly allocated sequence
///
/// Inputs shorter than two elements are copied unchanged. Otherwise the left
/// half holds the first `len / 2` elements and the right half the rest.
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    merge_sort_by(values, T::cmp)
}

/// Stable merge sort with a caller supplied ordering
///
/// On ties the element from the left half is taken first, so equal elements
/// keep their original relative order.
pub fn merge_sort_by<T, F>(values: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    sort_observed(values, &compare, &mut ())
}

/// Merge sort that also counts the elements it allocates
///
/// The sorted output is still live when the trace is returned, so
/// `trace.live == values.len()`.
pub fn merge_sort_traced<T: Ord + Clone>(values: &[T]) -> (Vec<T>, AllocationTrace) {
    let mut trace = AllocationTrace::default();
    let sorted = sort_observed(values, &T::cmp, &mut trace);
    (sorted, trace)
}

fn sort_observed<T, F, O>(values: &[T], compare: &F, observer: &mut O) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    O: AllocationObserver,
{
    if values.len() < 2 {
        observer.allocated(values.len());
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = sort_observed(&values[..mid], compare, observer);
    let right = sort_observed(&values[mid..], compare, observer);

    observer.allocated(values.len());
    let merged = merge(&left, &right, compare);
    observer.released(left.len() + right.len());
    merged
}

fn merge<T, F>(left: &[T], right: &[T], compare: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
