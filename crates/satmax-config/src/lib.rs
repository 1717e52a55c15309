//! Configuration system for SatMax.
//!
//! Load oracle, search and benchmark settings from TOML or YAML files so the
//! solver command and search interval can change without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use satmax_config::SatMaxConfig;
//! use std::time::Duration;
//!
//! let config = SatMaxConfig::from_toml_str(r#"
//!     [oracle]
//!     command = "z3"
//!     timeout_secs = 30
//!
//!     [search]
//!     min = 0.0
//!     max = 1.0
//!     eps = 0.001
//! "#).unwrap();
//!
//! assert_eq!(config.oracle.timeout(), Some(Duration::from_secs(30)));
//! assert_eq!(config.search.eps, 0.001);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use satmax_config::SatMaxConfig;
//!
//! let config = SatMaxConfig::load_or_default("satmax.toml").unwrap();
//! assert_eq!(config.oracle.command, "z3");
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SatMaxConfig {
    /// How to invoke the external solver.
    pub oracle: OracleConfig,

    /// Interval and precision for a single maximization.
    pub search: SearchConfig,

    /// Repeated-trial experiment settings.
    pub benchmark: BenchmarkSettings,
}

impl SatMaxConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads an optional configuration file, falling back to defaults only
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the solver command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.oracle.command = command.into();
        self
    }

    /// Sets the solver timeout in seconds. Zero disables it.
    pub fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.oracle.timeout_secs = seconds;
        self
    }

    /// Sets the search interval and precision.
    pub fn with_search(mut self, min: f64, max: f64, eps: f64) -> Self {
        self.search = SearchConfig { min, max, eps };
        self
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.oracle.command.trim().is_empty() {
            return Err(ConfigError::Invalid("oracle.command is empty".into()));
        }
        if self.oracle.objective.trim().is_empty() {
            return Err(ConfigError::Invalid("oracle.objective is empty".into()));
        }
        self.search.validate("search")?;
        self.benchmark.interval().validate("benchmark")?;
        if self.benchmark.runs == 0 {
            return Err(ConfigError::Invalid("benchmark.runs must be at least 1".into()));
        }
        Ok(())
    }
}

/// External solver invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OracleConfig {
    /// Solver executable.
    pub command: String,

    /// Arguments; the query is written to stdin.
    pub args: Vec<String>,

    /// Seconds to wait for one answer. Zero waits forever.
    pub timeout_secs: u64,

    /// Name of the objective variable asserted on.
    pub objective: String,
}

impl OracleConfig {
    /// Returns the per-query time limit, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: "z3".to_string(),
            args: vec!["-smt2".to_string(), "-st".to_string(), "-in".to_string()],
            timeout_secs: 0,
            objective: "Utility".to_string(),
        }
    }
}

/// Search interval `[min, max]` and precision `eps`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    pub min: f64,
    pub max: f64,
    pub eps: f64,
}

impl SearchConfig {
    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if !(self.min < self.max) {
            return Err(ConfigError::Invalid(format!(
                "{section}.min ({}) must be below {section}.max ({})",
                self.min, self.max
            )));
        }
        if !(self.eps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{section}.eps ({}) must be positive",
                self.eps
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            eps: 0.001,
        }
    }
}

/// Repeated-trial experiment settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Measured runs per scenario.
    pub runs: usize,

    /// Unmeasured runs before measuring.
    pub warmup: usize,

    pub min: f64,
    pub max: f64,
    pub eps: f64,

    /// Scenario identifiers to run.
    pub scenarios: Vec<u32>,

    /// Directory holding the `Scenario<id>` folders.
    pub scenario_dir: PathBuf,

    /// Optional CSV output path.
    pub csv_output: Option<PathBuf>,

    /// Optional Markdown report path.
    pub markdown_output: Option<PathBuf>,
}

impl BenchmarkSettings {
    pub fn interval(&self) -> SearchConfig {
        SearchConfig {
            min: self.min,
            max: self.max,
            eps: self.eps,
        }
    }
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            runs: 20,
            warmup: 0,
            min: 0.2,
            max: 0.8,
            eps: 0.01,
            scenarios: vec![1, 2, 3],
            scenario_dir: PathBuf::from("."),
            csv_output: None,
            markdown_output: None,
        }
    }
}

#[cfg(test)]
mod tests;
