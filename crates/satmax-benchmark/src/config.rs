//! Benchmark configuration.

use satmax_config::BenchmarkSettings;

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, the search interval and
/// optional output paths.
///
/// # Example
///
/// ```
/// use satmax_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_warmup_count(3)
///     .with_run_count(10);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    min: f64,
    max: f64,
    eps: f64,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - run_count: 20
    /// - interval: [0.2, 0.8] with eps 0.01
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.run_count(), 20);
    /// assert_eq!(config.interval(), (0.2, 0.8));
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            run_count: 20,
            min: 0.2,
            max: 0.8,
            eps: 0.01,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Builds a configuration from the `[benchmark]` section of a config file.
    pub fn from_settings(name: impl Into<String>, settings: &BenchmarkSettings) -> Self {
        let mut config = Self::new(name)
            .with_warmup_count(settings.warmup)
            .with_run_count(settings.runs)
            .with_interval(settings.min, settings.max, settings.eps);
        config.csv_output_path = settings
            .csv_output
            .as_ref()
            .map(|p| p.display().to_string());
        config.markdown_output_path = settings
            .markdown_output
            .as_ref()
            .map(|p| p.display().to_string());
        config
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the search interval and precision used by every run.
    pub fn with_interval(mut self, min: f64, max: f64, eps: f64) -> Self {
        self.min = min;
        self.max = max;
        self.eps = eps;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns `(min, max)`.
    pub fn interval(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_settings() {
        let settings = BenchmarkSettings {
            runs: 5,
            warmup: 2,
            min: 0.1,
            max: 0.9,
            eps: 0.05,
            csv_output: Some(PathBuf::from("out.csv")),
            ..BenchmarkSettings::default()
        };
        let config = BenchmarkConfig::from_settings("Bench", &settings);

        assert_eq!(config.run_count(), 5);
        assert_eq!(config.warmup_count(), 2);
        assert_eq!(config.interval(), (0.1, 0.9));
        assert_eq!(config.eps(), 0.05);
        assert_eq!(config.csv_output_path(), Some("out.csv"));
        assert_eq!(config.markdown_output_path(), None);
    }
}
