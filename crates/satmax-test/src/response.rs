//! Solver response text fixtures.
//!
//! # Example
//!
//! ```
//! use satmax_test::response::SatResponse;
//!
//! let text = SatResponse::new()
//!     .real("Utility", "(/ 73.0 100.0)")
//!     .int("PinLeng", 6)
//!     .build();
//! assert!(text.starts_with("sat\n"));
//! assert!(text.contains("(define-fun Utility () Real\n    (/ 73.0 100.0))"));
//! ```

/// What z3 prints for `(check-sat)` followed by `(get-model)` on an
/// unsatisfiable problem.
pub const UNSAT_RESPONSE: &str =
    "unsat\n(error \"line 42 column 10: model is not available\")\n";

/// Builder for a feasible response with a model.
#[derive(Debug, Clone, Default)]
pub struct SatResponse {
    declarations: Vec<(String, &'static str, String)>,
}

impl SatResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a `Real` variable with the given value text.
    pub fn real(mut self, name: &str, value: &str) -> Self {
        self.declarations
            .push((name.to_string(), "Real", value.to_string()));
        self
    }

    /// Declares an `Int` variable.
    pub fn int(mut self, name: &str, value: i64) -> Self {
        let text = if value < 0 {
            format!("(- {})", -value)
        } else {
            value.to_string()
        };
        self.declarations.push((name.to_string(), "Int", text));
        self
    }

    /// Declares a `Bool` variable.
    pub fn bool(mut self, name: &str, value: bool) -> Self {
        self.declarations
            .push((name.to_string(), "Bool", value.to_string()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("sat\n(\n");
        for (name, sort, value) in &self.declarations {
            out.push_str(&format!("  (define-fun {} () {}\n    {})\n", name, sort, value));
        }
        out.push_str(")\n");
        out
    }
}

/// Feasible response whose model only declares `Utility`.
pub fn sat_response(utility: &str) -> String {
    SatResponse::new().real("Utility", utility).build()
}
