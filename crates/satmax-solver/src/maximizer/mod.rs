//! Binary-search maximization of the objective.
//!
//! Requires the feasible set to be monotone in the threshold: if
//! `objective > t` is feasible, so is every `objective > t'` with `t' < t`.
//! Under that precondition the search returns, within `eps`, the supremum of
//! feasible thresholds in `[min, max]`.

mod outcome;


pub use outcome::MaximizeOutcome;

use satmax_core::{
    round3, ConstraintSet, Exchange, MaximizeError, RoundCollector, RoundLog, RoundRecord,
    Threshold, Verdict,
};
use tracing::{debug, info, warn};

use crate::oracle::DecisionOracle;
use crate::scope::SearchState;

/// Maximizes the objective over a fixed constraint set.
///
/// Every oracle query is handed to the collector `C` as a [`RoundRecord`].
/// Round indices are 1-based and keep counting across calls to
/// [`maximize`](Self::maximize); the collector is never cleared by the
/// maximizer.
///
/// # Example
///
/// ```
/// use satmax_core::{ConstraintSet, RoundLog};
/// use satmax_solver::{DecisionOracle, Maximizer};
/// use satmax_test::CutoffExchange;
///
/// let oracle = DecisionOracle::new(CutoffExchange::new(0.6));
/// let constraints = ConstraintSet::new("(declare-const Utility Real)");
/// let mut maximizer = Maximizer::new(oracle, constraints, RoundLog::new());
///
/// let outcome = maximizer.maximize(0.0, 1.0, 0.001).unwrap();
/// assert!(outcome.best >= 0.59 && outcome.best <= 0.6);
/// assert_eq!(maximizer.collector().len() as u64, outcome.rounds);
/// ```
#[derive(Debug)]
pub struct Maximizer<E, C = RoundLog> {
    oracle: DecisionOracle<E>,
    constraints: ConstraintSet,
    collector: C,
    rounds_issued: u64,
}

impl<E, C> Maximizer<E, C>
where
    E: Exchange,
    C: RoundCollector,
{
    pub fn new(oracle: DecisionOracle<E>, constraints: ConstraintSet, collector: C) -> Self {
        Self {
            oracle,
            constraints,
            collector,
            rounds_issued: 0,
        }
    }

    /// Finds the largest feasible threshold in `[min, max]` to within `eps`.
    ///
    /// 1. Query `min`; infeasible fails with [`MaximizeError::InfeasibleLowerBound`].
    /// 2. Query `max`; feasible returns `max` without bisecting.
    /// 3. Bisect while `high - low > eps`, keeping the last feasible midpoint.
    ///
    /// The returned `best` is rounded to 3 decimals.
    ///
    /// # Errors
    ///
    /// Precondition failures ([`MaximizeError::InvalidInterval`],
    /// [`MaximizeError::InvalidPrecision`]) are raised before any query.
    /// Oracle failures abort the call with the failing round's index.
    pub fn maximize(
        &mut self,
        min: Threshold,
        max: Threshold,
        eps: f64,
    ) -> Result<MaximizeOutcome, MaximizeError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(MaximizeError::InvalidInterval { min, max });
        }
        if !(eps > 0.0) {
            return Err(MaximizeError::InvalidPrecision { eps });
        }

        info!(
            event = "search_start",
            min,
            max,
            eps,
            objective = self.oracle.objective(),
            constraint_bytes = self.constraints.len() as u64,
        );

        let mut state = SearchState::new(min, max);

        let verdict = self.issue(&mut state, min)?;
        if !verdict.is_feasible() {
            warn!(min, round = self.rounds_issued, "lower bound is infeasible");
            return Err(MaximizeError::InfeasibleLowerBound {
                min,
                round: self.rounds_issued,
            });
        }
        state.record_feasible(min, verdict);

        let verdict = self.issue(&mut state, max)?;
        if verdict.is_feasible() {
            state.record_feasible(max, verdict);
            return Ok(self.finish(state, max, true));
        }

        while state.width() > eps {
            let mid = state.midpoint();
            // Adjacent floats: the interval cannot shrink any further.
            if mid <= state.low || mid >= state.high {
                debug!(low = state.low, high = state.high, "interval exhausted before eps");
                break;
            }

            let verdict = self.issue(&mut state, mid)?;
            if verdict.is_feasible() {
                state.low = mid;
                state.record_feasible(mid, verdict);
            } else {
                state.high = mid;
            }
        }

        let best = state
            .best_threshold
            .ok_or(MaximizeError::NoFeasibleThresholdFound {
                rounds: state.rounds,
            })?;
        Ok(self.finish(state, best, false))
    }

    // Issues one query and records it. Oracle failures are not recorded.
    fn issue(
        &mut self,
        state: &mut SearchState,
        threshold: Threshold,
    ) -> Result<Verdict, MaximizeError> {
        self.rounds_issued += 1;
        state.rounds += 1;
        let round = self.rounds_issued;

        let verdict = self
            .oracle
            .query(&self.constraints, threshold)
            .map_err(|source| {
                warn!(round, threshold, error = %source, "oracle query failed");
                MaximizeError::Oracle {
                    round,
                    threshold,
                    source,
                }
            })?;

        let record = RoundRecord {
            index: round,
            requested_threshold: threshold,
            model_utility: verdict.model_utility(),
            verdict: verdict.kind(),
        };
        debug!(
            event = "round",
            round,
            threshold,
            status = %record.verdict,
            model_utility = record.model_utility,
        );
        self.collector.record(record);

        Ok(verdict)
    }

    fn finish(&self, state: SearchState, best: Threshold, shortcut: bool) -> MaximizeOutcome {
        let best = round3(best);
        let elapsed = state.elapsed();
        info!(
            event = "search_end",
            best,
            rounds = state.rounds,
            shortcut,
            duration_ms = elapsed.as_millis() as u64,
        );
        MaximizeOutcome {
            best,
            model: state.best_model,
            model_utility: state.best_model_utility,
            rounds: state.rounds,
            shortcut,
            elapsed,
        }
    }
}

impl<E, C> Maximizer<E, C> {
    pub fn oracle(&self) -> &DecisionOracle<E> {
        &self.oracle
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Swaps the constraint set for subsequent calls.
    pub fn set_constraints(&mut self, constraints: ConstraintSet) {
        self.constraints = constraints;
    }

    pub fn collector(&self) -> &C {
        &self.collector
    }

    pub fn collector_mut(&mut self) -> &mut C {
        &mut self.collector
    }

    /// Queries issued over the lifetime of this maximizer.
    pub fn rounds_issued(&self) -> u64 {
        self.rounds_issued
    }

    pub fn into_parts(self) -> (DecisionOracle<E>, ConstraintSet, C) {
        (self.oracle, self.constraints, self.collector)
    }
}
