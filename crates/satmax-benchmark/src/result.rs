//! Benchmark result types.

use std::time::Duration;

use crate::memory::BYTES_PER_MB;

/// Result of a single measured run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Run index (1-based).
    pub run_index: usize,
    /// Wall-clock time of the maximization call.
    pub solve_time: Duration,
    /// Resident memory of this process after the run, if it could be read.
    pub memory_bytes: Option<u64>,
    /// Best utility returned by the run.
    pub utility: f64,
    /// Oracle queries issued by the run.
    pub rounds: u64,
}

impl BenchmarkRun {
    /// Returns the resident memory in megabytes.
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_benchmark::BenchmarkRun;
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     run_index: 1,
    ///     solve_time: Duration::from_millis(40),
    ///     memory_bytes: Some(3 * 1024 * 1024),
    ///     utility: 0.59,
    ///     rounds: 8,
    /// };
    /// assert_eq!(run.memory_mb(), Some(3.0));
    /// ```
    pub fn memory_mb(&self) -> Option<f64> {
        self.memory_bytes.map(|bytes| bytes as f64 / BYTES_PER_MB)
    }

    pub fn solve_time_ms(&self) -> f64 {
        self.solve_time.as_secs_f64() * 1000.0
    }
}

/// Aggregated results from all measured runs of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Scenario identifier.
    pub scenario: String,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, scenario: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenario: scenario.into(),
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the average solve time.
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", "1");
    /// for (i, ms) in [100, 200].into_iter().enumerate() {
    ///     result.add_run(BenchmarkRun {
    ///         run_index: i + 1,
    ///         solve_time: Duration::from_millis(ms),
    ///         memory_bytes: None,
    ///         utility: 0.5,
    ///         rounds: 7,
    ///     });
    /// }
    ///
    /// assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    /// ```
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time).sum();
        total / self.runs.len() as u32
    }

    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Memory statistics cover only runs whose memory could be sampled;
    /// `None` when no run was sampled.
    pub fn min_memory_mb(&self) -> Option<f64> {
        self.memory_samples().reduce(f64::min)
    }

    pub fn avg_memory_mb(&self) -> Option<f64> {
        let (count, total) = self
            .memory_samples()
            .fold((0usize, 0.0), |(count, total), mb| (count + 1, total + mb));
        (count > 0).then(|| total / count as f64)
    }

    pub fn max_memory_mb(&self) -> Option<f64> {
        self.memory_samples().reduce(f64::max)
    }

    pub fn min_utility(&self) -> f64 {
        self.fold(|r| r.utility, f64::min)
    }

    pub fn avg_utility(&self) -> f64 {
        self.mean(|r| r.utility)
    }

    pub fn max_utility(&self) -> f64 {
        self.fold(|r| r.utility, f64::max)
    }

    pub fn avg_rounds(&self) -> f64 {
        self.mean(|r| r.rounds as f64)
    }

    fn memory_samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.runs.iter().filter_map(BenchmarkRun::memory_mb)
    }

    // 0.0 when there are no runs.
    fn fold(&self, metric: impl Fn(&BenchmarkRun) -> f64, pick: fn(f64, f64) -> f64) -> f64 {
        self.runs.iter().map(metric).reduce(pick).unwrap_or(0.0)
    }

    fn mean(&self, metric: impl Fn(&BenchmarkRun) -> f64) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(metric).sum::<f64>() / self.runs.len() as f64
    }
}
