//! Error types for SatMax

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::threshold::Threshold;

/// Failure of the text exchange with the external solver process.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The solver process could not be started
    #[error("failed to spawn solver `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the query or reading the response failed
    #[error("solver I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The solver did not answer within the configured limit
    #[error("solver did not answer within {0:?}")]
    Timeout(Duration),
}

/// Failure of a single decision-oracle query.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The solver wrote to its error channel and gave no verdict
    #[error("solver reported an error:\n{stderr}")]
    Solver { stderr: String },

    /// The response carried neither the feasible nor the infeasible marker
    #[error("solver returned neither 'sat' nor 'unsat'")]
    Protocol { stdout: String },

    /// The exchange itself failed before a response was available
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Failure to load a constraint set from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of one maximization call.
///
/// Every variant that follows an oracle query carries the 1-based round
/// index of the query that triggered it.
#[derive(Debug, Error)]
pub enum MaximizeError {
    #[error("invalid search interval: min {min} must be below max {max}")]
    InvalidInterval { min: Threshold, max: Threshold },

    #[error("invalid precision {eps}: must be positive")]
    InvalidPrecision { eps: f64 },

    #[error("model is UNSAT even for Utility > {min} (round {round}); check your constraints")]
    InfeasibleLowerBound { min: Threshold, round: u64 },

    #[error("binary search finished after {rounds} rounds but no SAT utility was recorded")]
    NoFeasibleThresholdFound { rounds: u64 },

    #[error("round {round} (Utility > {threshold}) failed: {source}")]
    Oracle {
        round: u64,
        threshold: Threshold,
        #[source]
        source: OracleError,
    },
}

impl MaximizeError {
    /// Returns the round that triggered this error, if a query was issued.
    pub fn round(&self) -> Option<u64> {
        match self {
            Self::InfeasibleLowerBound { round, .. } | Self::Oracle { round, .. } => Some(*round),
            Self::NoFeasibleThresholdFound { rounds } => Some(*rounds),
            Self::InvalidInterval { .. } | Self::InvalidPrecision { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_reported_for_oracle_failures() {
        let err = MaximizeError::Oracle {
            round: 4,
            threshold: 0.5,
            source: OracleError::Solver {
                stderr: "boom".to_string(),
            },
        };
        assert_eq!(err.round(), Some(4));
        assert!(err.to_string().contains("round 4"));
    }

    #[test]
    fn test_precondition_errors_have_no_round() {
        let err = MaximizeError::InvalidInterval { min: 1.0, max: 0.0 };
        assert_eq!(err.round(), None);
    }

    #[test]
    fn test_resource_not_found_names_path() {
        let err = LoadError::ResourceNotFound {
            path: PathBuf::from("Scenario9/model-zu-9.txt"),
        };
        assert!(err.to_string().contains("Scenario9/model-zu-9.txt"));
    }
}
