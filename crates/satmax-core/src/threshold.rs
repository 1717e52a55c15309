//! Search thresholds and their SMT-LIB rendering.

use std::fmt;

/// A candidate lower bound asserted on the objective variable.
pub type Threshold = f64;

/// Rounds a value to 3 decimal places.
///
/// # Example
///
/// ```
/// use satmax_core::round3;
///
/// assert_eq!(round3(0.59765625), 0.598);
/// assert_eq!(round3(1.0), 1.0);
/// ```
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Renders a real number as an SMT-LIB decimal literal.
///
/// Integral values keep a `.0` suffix so they stay `Real` literals, and
/// negative values are written as `(- x)`.
///
/// # Example
///
/// ```
/// use satmax_core::SmtReal;
///
/// assert_eq!(SmtReal(0.5).to_string(), "0.5");
/// assert_eq!(SmtReal(1.0).to_string(), "1.0");
/// assert_eq!(SmtReal(-0.25).to_string(), "(- 0.25)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmtReal(pub f64);

impl fmt::Display for SmtReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0.0");
        }
        if value.is_sign_negative() {
            return write!(f, "(- {})", SmtReal(-value));
        }
        if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3_rounds_half_away_from_zero() {
        assert_eq!(round3(0.0625), 0.063);
        assert_eq!(round3(0.25), 0.25);
        assert_eq!(round3(-0.3333), -0.333);
    }

    #[test]
    fn test_smt_real_never_uses_exponent() {
        assert_eq!(SmtReal(0.0009765625).to_string(), "0.0009765625");
        assert_eq!(SmtReal(0.00001).to_string(), "0.00001");
    }

    #[test]
    fn test_smt_real_zero() {
        assert_eq!(SmtReal(0.0).to_string(), "0.0");
        assert_eq!(SmtReal(-0.0).to_string(), "0.0");
    }
}
