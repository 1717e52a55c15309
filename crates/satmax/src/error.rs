//! Top-level error for SatMax entry points.

use std::io;

use satmax_benchmark::BenchmarkError;
use satmax_config::ConfigError;
use satmax_core::{LoadError, MaximizeError};
use thiserror::Error;

/// Any failure of a SatMax entry point.
#[derive(Debug, Error)]
pub enum SatMaxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Maximize(#[from] MaximizeError),

    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
