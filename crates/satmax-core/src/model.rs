//! Lookup of variable values in solver model text.
//!
//! A model declares each variable as a header line `(define-fun <name> ...`
//! followed by its value on the next line:
//!
//! ```text
//! (define-fun Utility () Real
//!   (/ 73.0 100.0))
//! ```

use std::fmt;

use crate::numeric::parse_numeric;

/// Result of looking up a variable in a model.
///
/// Every case except [`ModelLookup::Value`] is a valid "absent" answer, not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelLookup {
    /// The variable was declared and its value decoded.
    Value(f64),
    /// No model has been recorded yet.
    NoModel,
    /// The model has no declaration for the variable.
    NotDeclared,
    /// The declaration is the last line of the model.
    MissingValueLine,
    /// The line after the declaration did not decode as a number.
    Unparseable { line: String },
}

impl ModelLookup {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ModelLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::NoModel => f.write_str("no model stored"),
            Self::NotDeclared => f.write_str("not found in the model"),
            Self::MissingValueLine => f.write_str("no value line after declaration"),
            Self::Unparseable { line } => write!(f, "could not parse value from line: {}", line),
        }
    }
}

/// Looks up `name` in `model`, reporting why a value is absent.
///
/// Only the first declaration counts.
pub fn lookup(name: &str, model: &str) -> ModelLookup {
    let header = format!("(define-fun {} ", name);
    let mut lines = model.lines();

    while let Some(line) = lines.next() {
        if !line.trim().starts_with(&header) {
            continue;
        }
        return match lines.next() {
            None => ModelLookup::MissingValueLine,
            Some(value_line) => match parse_numeric(value_line) {
                Some(v) => ModelLookup::Value(v),
                None => ModelLookup::Unparseable {
                    line: value_line.to_string(),
                },
            },
        };
    }

    ModelLookup::NotDeclared
}

/// Extracts the numeric value of `name` from `model`.
///
/// # Example
///
/// ```
/// use satmax_core::extract;
///
/// let model = "sat\n(\n  (define-fun Utility () Real\n    0.73)\n)";
/// assert_eq!(extract("Utility", model), Some(0.73));
/// assert_eq!(extract("Security", model), None);
/// ```
pub fn extract(name: &str, model: &str) -> Option<f64> {
    lookup(name, model).value()
}
