//! Per-call search state.

use std::time::{Duration, Instant};

use satmax_core::{Threshold, Verdict};

/// Mutable state of one maximization call.
///
/// Created fresh by every call, so nothing but the round counter and the
/// collector outlives a search.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Highest threshold known to be feasible.
    pub low: Threshold,
    /// Lowest threshold not yet known to be feasible.
    pub high: Threshold,
    /// Best feasible threshold recorded so far.
    pub best_threshold: Option<Threshold>,
    /// Model returned alongside `best_threshold`.
    pub best_model: Option<String>,
    /// Objective value decoded from `best_model`.
    pub best_model_utility: Option<f64>,
    /// Queries issued during this call.
    pub rounds: u64,
    started: Instant,
}

impl SearchState {
    pub fn new(min: Threshold, max: Threshold) -> Self {
        Self {
            low: min,
            high: max,
            best_threshold: None,
            best_model: None,
            best_model_utility: None,
            rounds: 0,
            started: Instant::now(),
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn midpoint(&self) -> Threshold {
        (self.low + self.high) / 2.0
    }

    /// Stores a feasible verdict as the new best. Infeasible verdicts are ignored.
    pub fn record_feasible(&mut self, threshold: Threshold, verdict: Verdict) {
        if let Verdict::Feasible {
            model_utility,
            model,
        } = verdict
        {
            self.best_threshold = Some(threshold);
            self.best_model = Some(model);
            self.best_model_utility = model_utility;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
