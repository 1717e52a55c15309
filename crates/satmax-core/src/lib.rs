//! SatMax Core - Core types and traits for threshold maximization
//!
//! This crate provides the fundamental abstractions for SatMax:
//! - Constraint sets and search thresholds
//! - Oracle verdicts and the text exchange seam to an external solver
//! - Numeric decoding of solver model output
//! - Round records and the collectors that store them
//! - The error taxonomy shared by every crate in the workspace

pub mod constraint;
pub mod error;
pub mod exchange;
pub mod model;
pub mod numeric;
pub mod round;
pub mod threshold;
pub mod verdict;

#[cfg(test)]
mod model_tests;

pub use constraint::ConstraintSet;
pub use error::{ExchangeError, LoadError, MaximizeError, OracleError};
pub use exchange::{Exchange, Exchanged};
pub use model::{extract, lookup, ModelLookup};
pub use numeric::parse_numeric;
pub use round::{RoundCollector, RoundLog, RoundRecord, SharedRoundLog};
pub use threshold::{round3, SmtReal, Threshold};
pub use verdict::{Verdict, VerdictKind};
