//! Wiring a maximizer from configuration.

use satmax_config::{OracleConfig, SatMaxConfig};
use satmax_core::{ConstraintSet, MaximizeError, RoundLog};

use crate::maximizer::{MaximizeOutcome, Maximizer};
use crate::oracle::DecisionOracle;
use crate::process::ProcessExchange;

impl DecisionOracle<ProcessExchange> {
    /// Oracle backed by the configured solver process.
    pub fn from_config(config: &OracleConfig) -> Self {
        DecisionOracle::new(ProcessExchange::from_config(config))
            .with_objective(config.objective.clone())
    }
}

impl Maximizer<ProcessExchange, RoundLog> {
    /// Maximizer over `constraints` that logs rounds into a fresh [`RoundLog`].
    ///
    /// # Example
    ///
    /// ```
    /// use satmax_config::SatMaxConfig;
    /// use satmax_core::ConstraintSet;
    /// use satmax_solver::Maximizer;
    ///
    /// let config = SatMaxConfig::default();
    /// let maximizer = Maximizer::from_config(&config, ConstraintSet::new(""));
    /// assert_eq!(maximizer.oracle().objective(), "Utility");
    /// assert_eq!(maximizer.oracle().exchange().command(), "z3");
    /// ```
    pub fn from_config(config: &SatMaxConfig, constraints: ConstraintSet) -> Self {
        Maximizer::new(
            DecisionOracle::from_config(&config.oracle),
            constraints,
            RoundLog::new(),
        )
    }

    /// Runs one search over the configured interval.
    pub fn maximize_configured(
        &mut self,
        config: &SatMaxConfig,
    ) -> Result<MaximizeOutcome, MaximizeError> {
        let search = config.search;
        self.maximize(search.min, search.max, search.eps)
    }
}
