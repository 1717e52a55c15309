//! Monotone stub solver.
//!
//! [`CutoffExchange`] answers `Utility > t` as feasible exactly when
//! `t < cutoff`, returning a model whose `Utility` lies halfway between `t`
//! and the cutoff. It reads `t` back out of the query text, so it exercises
//! the real query builder.
//!
//! # Example
//!
//! ```
//! use satmax_core::Exchange;
//! use satmax_test::CutoffExchange;
//!
//! let mut exchange = CutoffExchange::new(0.6);
//! let sat = exchange.exchange("(assert (> Utility 0.5 ))\n(check-sat)").unwrap();
//! assert!(sat.stdout.starts_with("sat"));
//! let unsat = exchange.exchange("(assert (> Utility 0.6 ))\n(check-sat)").unwrap();
//! assert!(unsat.stdout.starts_with("unsat"));
//! assert_eq!(exchange.thresholds(), &[0.5, 0.6]);
//! ```

use satmax_core::{Exchange, ExchangeError, Exchanged};

use crate::response::{SatResponse, UNSAT_RESPONSE};

/// Stub solver feasible strictly below `cutoff`.
#[derive(Debug, Clone)]
pub struct CutoffExchange {
    cutoff: f64,
    objective: String,
    rational_models: bool,
    thresholds: Vec<f64>,
}

impl CutoffExchange {
    pub fn new(cutoff: f64) -> Self {
        Self {
            cutoff,
            objective: "Utility".to_string(),
            rational_models: false,
            thresholds: Vec::new(),
        }
    }

    /// Reads thresholds asserted on `objective` instead of `Utility`.
    pub fn with_objective(mut self, objective: &str) -> Self {
        self.objective = objective.to_string();
        self
    }

    /// Prints model values as `(/ n 1000.0)` rationals.
    pub fn with_rational_models(mut self) -> Self {
        self.rational_models = true;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Thresholds queried so far, in order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Whether `objective > threshold` is feasible for this stub.
    pub fn is_feasible(&self, threshold: f64) -> bool {
        threshold < self.cutoff
    }

    fn model_for(&self, threshold: f64) -> String {
        let utility = (threshold + self.cutoff) / 2.0;
        let value = if self.rational_models {
            format!("(/ {:.1} 1000.0)", (utility * 1000.0).round())
        } else {
            utility.to_string()
        };
        SatResponse::new()
            .real(&self.objective, &value)
            .real("Security", "0.8125")
            .build()
    }
}

impl Exchange for CutoffExchange {
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError> {
        let Some(threshold) = parse_asserted_threshold(input, &self.objective) else {
            return Ok(Exchanged::new(
                "",
                format!("(error \"no threshold asserted on {}\")", self.objective),
            ));
        };
        self.thresholds.push(threshold);

        if self.is_feasible(threshold) {
            Ok(Exchanged::stdout(self.model_for(threshold)))
        } else {
            Ok(Exchanged::stdout(UNSAT_RESPONSE))
        }
    }
}

/// Reads `t` from the last `(assert (> <objective> t ))` in a query.
///
/// Accepts plain decimals and the negated form `(- t)`.
pub fn parse_asserted_threshold(query: &str, objective: &str) -> Option<f64> {
    let prefix = format!("(assert (> {} ", objective);
    let start = query.rfind(&prefix)? + prefix.len();
    let rest = &query[start..];
    let literal = rest[..rest.find("))")?].trim();

    match literal.strip_prefix("(- ") {
        Some(negated) => negated
            .trim_end_matches(')')
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| -v),
        None => literal.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_threshold() {
        let query = "(declare-const Utility Real)\n(assert (> Utility 0.25 ))\n(check-sat)\n";
        assert_eq!(parse_asserted_threshold(query, "Utility"), Some(0.25));
    }

    #[test]
    fn test_parse_negative_threshold() {
        let query = "(assert (> Utility (- 0.5) ))\n(check-sat)\n";
        assert_eq!(parse_asserted_threshold(query, "Utility"), Some(-0.5));
    }

    #[test]
    fn test_parse_uses_last_assertion() {
        let query = "(assert (> Utility 0.1 ))\n(assert (> Utility 0.7 ))\n";
        assert_eq!(parse_asserted_threshold(query, "Utility"), Some(0.7));
    }

    #[test]
    fn test_parse_missing_assertion() {
        assert_eq!(parse_asserted_threshold("(check-sat)", "Utility"), None);
    }

    #[test]
    fn test_boundary_is_infeasible() {
        let stub = CutoffExchange::new(0.6);
        assert!(stub.is_feasible(0.599));
        assert!(!stub.is_feasible(0.6));
    }

    #[test]
    fn test_rational_model_text() {
        let mut stub = CutoffExchange::new(0.6).with_rational_models();
        let out = stub.exchange("(assert (> Utility 0.2 ))").unwrap();
        assert!(out.stdout.contains("(/ 400.0 1000.0)"));
    }
}
