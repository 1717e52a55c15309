//! Result of a successful maximization.

use std::time::Duration;

use satmax_core::{lookup, ModelLookup, Threshold};

/// Best threshold found by one maximization call, with its model.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximizeOutcome {
    /// Best feasible threshold, rounded to 3 decimals.
    pub best: Threshold,
    /// Solver response for `best`, including the model.
    pub model: Option<String>,
    /// Objective value decoded from `model`.
    pub model_utility: Option<f64>,
    /// Queries issued by this call.
    pub rounds: u64,
    /// True when the upper bound itself was feasible and no bisection ran.
    pub shortcut: bool,
    pub elapsed: Duration,
}

impl MaximizeOutcome {
    /// Looks up a variable in the stored model.
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_core::ModelLookup;
    /// use satmax_solver::MaximizeOutcome;
    /// use std::time::Duration;
    ///
    /// let outcome = MaximizeOutcome {
    ///     best: 0.5,
    ///     model: Some("sat\n(\n  (define-fun Security () Real\n    0.8)\n)".to_string()),
    ///     model_utility: None,
    ///     rounds: 3,
    ///     shortcut: false,
    ///     elapsed: Duration::ZERO,
    /// };
    /// assert_eq!(outcome.lookup("Security"), ModelLookup::Value(0.8));
    /// assert_eq!(outcome.lookup("Usability"), ModelLookup::NotDeclared);
    /// ```
    pub fn lookup(&self, name: &str) -> ModelLookup {
        match &self.model {
            Some(model) => lookup(name, model),
            None => ModelLookup::NoModel,
        }
    }

    /// Value of `name` in the stored model, if present and numeric.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.lookup(name).value()
    }
}
