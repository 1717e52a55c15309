//! Exchange that replays queued responses.
//!
//! # Example
//!
//! ```
//! use satmax_core::Exchange;
//! use satmax_test::ScriptedExchange;
//!
//! let mut exchange = ScriptedExchange::new().then_sat("0.4").then_unsat();
//! assert!(exchange.exchange("q1").unwrap().stdout.starts_with("sat"));
//! assert!(exchange.exchange("q2").unwrap().stdout.starts_with("unsat"));
//! assert_eq!(exchange.queries().len(), 2);
//! ```

use std::collections::VecDeque;

use satmax_core::{Exchange, ExchangeError, Exchanged};

use crate::response::{sat_response, UNSAT_RESPONSE};

/// Stderr returned once the script runs out.
pub const EXHAUSTED: &str = "scripted exchange exhausted";

/// Replays responses in order and records every query it receives.
#[derive(Debug, Default)]
pub struct ScriptedExchange {
    responses: VecDeque<Result<Exchanged, ExchangeError>>,
    queries: Vec<String>,
}

impl ScriptedExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a feasible response with the given `Utility` value text.
    pub fn then_sat(self, utility: &str) -> Self {
        self.then_stdout(sat_response(utility))
    }

    /// Queues an infeasible response.
    pub fn then_unsat(self) -> Self {
        self.then_stdout(UNSAT_RESPONSE)
    }

    pub fn then_stdout(self, stdout: impl Into<String>) -> Self {
        self.then(Exchanged::stdout(stdout))
    }

    pub fn then(mut self, response: Exchanged) -> Self {
        self.responses.push_back(Ok(response));
        self
    }

    pub fn then_error(mut self, error: ExchangeError) -> Self {
        self.responses.push_back(Err(error));
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Number of responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Exchange for ScriptedExchange {
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError> {
        self.queries.push(input.to_string());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Ok(Exchanged::new("", EXHAUSTED)))
    }
}
