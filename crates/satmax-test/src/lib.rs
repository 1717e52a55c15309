//! Shared test fixtures for SatMax crates.
//!
//! This crate provides solver stand-ins and response text builders so that
//! oracle and maximizer tests never launch a real solver.
//!
//! - [`response`] - solver response text in the shape z3 prints it
//! - [`scripted`] - an exchange that replays queued responses
//! - [`cutoff`] - an exchange that is feasible strictly below a cutoff
//! - [`scenario`] - constraint sets, scenario directories and solver scripts on disk
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! satmax-test = { workspace = true }
//! ```

pub mod cutoff;
pub mod response;
pub mod scenario;
pub mod scripted;

pub use cutoff::{parse_asserted_threshold, CutoffExchange};
pub use response::{sat_response, SatResponse, UNSAT_RESPONSE};
pub use scripted::ScriptedExchange;
