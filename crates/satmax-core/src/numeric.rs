//! Decoding of numeric literals from solver model output.
//!
//! Solvers print a model value either as an exact rational `(/ n d)` or as a
//! plain decimal, depending on how they normalized the term. Both decode to
//! the same `f64` domain here.

use std::sync::LazyLock;

use regex::Regex;

use crate::threshold::round3;

static RATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(/\s*([\-0-9.]+)\s+([\-0-9.]+)\)").expect("rational pattern is valid")
});

/// Parses one line of model output into a number.
///
/// Rationals are divided out and rounded to 3 decimals. z3's negation
/// `(- x)` wraps either form. A zero denominator, a malformed literal or any
/// other content yields `None`.
///
/// # Example
///
/// ```
/// use satmax_core::parse_numeric;
///
/// assert_eq!(parse_numeric("42"), Some(42.0));
/// assert_eq!(parse_numeric("    3.5)"), Some(3.5));
/// assert_eq!(parse_numeric("(/ 1 4)"), Some(0.25));
/// assert_eq!(parse_numeric("(- (/ 7.0 2.0)))"), Some(-3.5));
/// assert_eq!(parse_numeric("(/ 1 0)"), None);
/// assert_eq!(parse_numeric("abc"), None);
/// ```
pub fn parse_numeric(line: &str) -> Option<f64> {
    let line = line.trim();

    if let Some(negated) = line
        .strip_prefix("(-")
        .filter(|rest| rest.starts_with(char::is_whitespace))
    {
        return parse_numeric(negated).map(|v| -v);
    }

    if let Some(caps) = RATIONAL.captures(line) {
        let numerator = parse_literal(&caps[1])?;
        let denominator = parse_literal(&caps[2])?;
        if denominator == 0.0 {
            return None;
        }
        return Some(round3(numerator / denominator));
    }

    parse_literal(line.trim_end_matches(')').trim_end())
}

fn parse_literal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
