//! Decision oracle: one feasibility question per query.
//!
//! A query appends `(assert (> <objective> t ))`, `(check-sat)` and
//! `(get-model)` to the constraint text and hands the result to an
//! [`Exchange`]. The response is then classified:
//!
//! 1. stdout contains `unsat` - [`Verdict::Infeasible`]
//! 2. otherwise stdout contains `sat` - [`Verdict::Feasible`]
//! 3. otherwise stderr is non-empty - [`OracleError::Solver`]
//! 4. otherwise - [`OracleError::Protocol`]
//!
//! The `unsat` check must come first since `unsat` contains `sat`.

use satmax_core::{
    extract, ConstraintSet, Exchange, Exchanged, OracleError, SmtReal, Threshold, Verdict,
};
use tracing::trace;

/// Objective variable asserted on when none is configured.
pub const DEFAULT_OBJECTIVE: &str = "Utility";

/// Answers "is `objective > t` satisfiable together with the constraints?".
///
/// # Example
///
/// ```
/// use satmax_core::ConstraintSet;
/// use satmax_solver::DecisionOracle;
/// use satmax_test::ScriptedExchange;
///
/// let exchange = ScriptedExchange::new().then_sat("0.55").then_unsat();
/// let mut oracle = DecisionOracle::new(exchange);
/// let constraints = ConstraintSet::new("(declare-const Utility Real)");
///
/// let verdict = oracle.query(&constraints, 0.5).unwrap();
/// assert_eq!(verdict.model_utility(), Some(0.55));
/// assert!(!oracle.query(&constraints, 0.6).unwrap().is_feasible());
/// ```
#[derive(Debug)]
pub struct DecisionOracle<E> {
    exchange: E,
    objective: String,
}

impl<E: Exchange> DecisionOracle<E> {
    pub fn new(exchange: E) -> Self {
        Self {
            exchange,
            objective: DEFAULT_OBJECTIVE.to_string(),
        }
    }

    /// Asserts on `objective` instead of `Utility`.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    pub fn exchange_mut(&mut self) -> &mut E {
        &mut self.exchange
    }

    pub fn into_exchange(self) -> E {
        self.exchange
    }

    /// Asks whether `objective > threshold` is feasible.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] when the exchange fails or the response
    /// carries no verdict.
    pub fn query(
        &mut self,
        constraints: &ConstraintSet,
        threshold: Threshold,
    ) -> Result<Verdict, OracleError> {
        let input = build_query(constraints, &self.objective, threshold);
        trace!(threshold, bytes = input.len(), "issuing oracle query");
        let response = self.exchange.exchange(&input)?;
        classify(&self.objective, response)
    }
}

/// Builds the full solver input for `objective > threshold`.
pub fn build_query(constraints: &ConstraintSet, objective: &str, threshold: Threshold) -> String {
    format!(
        "{}\n(assert (> {} {} ))\n(check-sat)\n(get-model)\n",
        constraints.as_str(),
        objective,
        SmtReal(threshold)
    )
}

/// Turns a raw solver response into a verdict.
///
/// For feasible responses the objective value is read from the model; a
/// missing or unreadable value leaves `model_utility` empty.
pub fn classify(objective: &str, response: Exchanged) -> Result<Verdict, OracleError> {
    let Exchanged { stdout, stderr } = response;

    if stdout.contains("unsat") {
        return Ok(Verdict::Infeasible);
    }
    if stdout.contains("sat") {
        let model_utility = extract(objective, &stdout);
        return Ok(Verdict::Feasible {
            model_utility,
            model: stdout,
        });
    }
    if !stderr.trim().is_empty() {
        return Err(OracleError::Solver { stderr });
    }
    Err(OracleError::Protocol { stdout })
}

#[cfg(test)]
mod tests;
