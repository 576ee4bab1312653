//! Wall-clock timing helpers
//!
//! Free functions over closures; arguments are captured by the closure
//! instead of being forwarded, so the helpers work with any demo instance.

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of an operation paired with how long it took
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional milliseconds
    pub fn millis(&self) -> f64 {
        duration_millis(self.elapsed)
    }
}

/// Run `f` once and capture its wall-clock duration
pub fn measure<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// Run `f`, log `"<label> took <ms> ms"` and hand back its result
pub fn measure_time<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    measure_time_with(label, f).value
}

/// Like [`measure_time`] but keeps the duration for the caller
pub fn measure_time_with<T, F>(label: &str, f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let timed = measure(f);
    info!("{}", timing_line(label, timed.elapsed));
    timed
}

/// Run `f` `runs` times and fold the durations into [`TimingStats`]
///
/// Returns the value produced by the last run. `runs` of zero is treated as one.
pub fn measure_repeated<T, F>(label: &str, runs: usize, mut f: F) -> (T, TimingStats)
where
    F: FnMut() -> T,
{
    let mut stats = TimingStats::default();
    let mut last = measure(&mut f);
    stats.update(last.elapsed);

    for _ in 1..runs {
        last = measure(&mut f);
        stats.update(last.elapsed);
    }

    debug!(
        "{}: {} runs, avg {:.4} ms, stddev {:.4} ms, min {:.4} ms, max {:.4} ms",
        label, stats.count, stats.avg_ms, stats.stddev_ms, stats.min_ms, stats.max_ms
    );

    (last.value, stats)
}

/// `"<label> took <ms> ms"`, the line logged for every timed operation
pub fn timing_line(label: &str, elapsed: Duration) -> String {
    format!("{} took {} ms", label, format_millis(elapsed))
}

/// Milliseconds with four decimal places
pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.4}", duration_millis(elapsed))
}

fn duration_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

/// Running statistics over repeated timings
/// Uses Welford's online algorithm so no samples are stored
#[derive(Debug, Clone, Serialize)]
pub struct TimingStats {
    /// Average duration in milliseconds
    pub avg_ms: f64,
    /// Sample standard deviation in milliseconds
    pub stddev_ms: f64,
    /// Number of samples collected
    pub count: usize,
    /// Fastest run
    pub min_ms: f64,
    /// Slowest run
    pub max_ms: f64,
    #[serde(skip)]
    m2: f64,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self {
            avg_ms: 0.0,
            stddev_ms: 0.0,
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            m2: 0.0,
        }
    }
}

impl TimingStats {
    /// Add one duration sample
    pub fn update(&mut self, elapsed: Duration) {
        self.update_ms(duration_millis(elapsed));
    }

    /// Add one sample already expressed in milliseconds
    pub fn update_ms(&mut self, sample_ms: f64) {
        self.count += 1;

        self.min_ms = self.min_ms.min(sample_ms);
        self.max_ms = self.max_ms.max(sample_ms);

        let delta = sample_ms - self.avg_ms;
        self.avg_ms += delta / self.count as f64;
        let delta2 = sample_ms - self.avg_ms;
        self.m2 += delta * delta2;

        if self.count > 1 {
            self.stddev_ms = (self.m2 / (self.count - 1) as f64).sqrt();
        }
    }

    /// Coefficient of variation (stddev / mean), 0 when the mean is 0
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.avg_ms > 0.0 {
            self.stddev_ms / self.avg_ms
        } else {
            0.0
        }
    }
}
