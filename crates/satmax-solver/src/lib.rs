//! SatMax Solver Engine
//!
//! This crate provides the threshold-maximization machinery:
//! - Process exchange with an external SMT solver
//! - Decision oracle (query building and verdict classification)
//! - Binary-search maximizer with per-call search state
//! - Constraint set loading from scenario directories
//! - Configuration wiring (builder module)

pub mod builder;
pub mod loader;
pub mod maximizer;
pub mod oracle;
pub mod process;
pub mod scope;

pub use loader::{load_constraint_file, ConstraintSource, ScenarioDirectory, ScenarioId};
pub use maximizer::{MaximizeOutcome, Maximizer};
pub use oracle::{build_query, classify, DecisionOracle};
pub use process::ProcessExchange;
pub use scope::SearchState;
