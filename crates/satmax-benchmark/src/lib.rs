//! Benchmarking framework for SatMax.
//!
//! Runs a maximizer repeatedly against scenario constraint sets, recording
//! wall-clock time, resident memory and the achieved utility of every run,
//! and renders the results as CSV, Markdown or a plain summary table.
//!
//! # Zero-Erasure Design
//!
//! The constraint source and the maximizer factory are stored as type
//! parameters, not trait objects.
//!
//! # Example
//!
//! ```
//! use satmax_benchmark::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::new("Healthcare")
//!     .with_warmup_count(1)
//!     .with_run_count(20)
//!     .with_interval(0.2, 0.8, 0.01)
//!     .with_csv_output("results.csv");
//!
//! assert_eq!(config.run_count(), 20);
//! assert_eq!(config.eps(), 0.01);
//! ```
//!
//! Full benchmark usage with a process-backed maximizer:
//!
//! ```text
//! let benchmark = Benchmark::new(
//!     config,
//!     ScenarioDirectory::new("."),
//!     |constraints| Maximizer::from_config(&settings, constraints),
//! );
//! let results = benchmark.run_all(&[1.into(), 2.into(), 3.into()])?;
//! println!("{}", SummaryTable::to_string(&results));
//! ```

mod config;
mod error;
mod memory;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use memory::{MemoryProbe, BYTES_PER_MB};
pub use report::{CsvExporter, MarkdownReport, SummaryTable};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::{Benchmark, BenchmarkBuilder};
