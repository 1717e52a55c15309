//! Benchmark errors.

use satmax_core::{LoadError, MaximizeError};
use thiserror::Error;

/// Failure that aborts one scenario's benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("scenario {scenario}: {source}")]
    Load {
        scenario: String,
        #[source]
        source: LoadError,
    },

    #[error("scenario {scenario}, warmup {warmup}: {source}")]
    Warmup {
        scenario: String,
        /// 1-based warmup index.
        warmup: usize,
        #[source]
        source: MaximizeError,
    },

    #[error("scenario {scenario}, run {run}: {source}")]
    Maximize {
        scenario: String,
        /// 1-based measured run index.
        run: usize,
        #[source]
        source: MaximizeError,
    },
}
