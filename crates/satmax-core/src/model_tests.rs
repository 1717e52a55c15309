//! Tests for model value lookup.

use crate::model::{extract, lookup, ModelLookup};

const MODEL: &str = "sat
(
  (define-fun PinLeng () Int
    6)
  (define-fun Utility () Real
    (/ 73.0 100.0))
  (define-fun Security () Real
    0.8125)
  (define-fun TwoFactor () Bool
    true)
)";

#[test]
fn test_extract_decimal_value() {
    let text = "(define-fun Utility () Real\n  0.73)";
    assert_eq!(extract("Utility", text), Some(0.73));
}

#[test]
fn test_extract_rational_value() {
    assert_eq!(extract("Utility", MODEL), Some(0.73));
}

#[test]
fn test_extract_integer_value() {
    assert_eq!(extract("PinLeng", MODEL), Some(6.0));
}

#[test]
fn test_missing_declaration_is_absent() {
    assert_eq!(extract("Confidentiality", MODEL), None);
    assert_eq!(lookup("Confidentiality", MODEL), ModelLookup::NotDeclared);
}

#[test]
fn test_name_must_match_exactly() {
    // `Utility` must not match the header of `UtilityWeight`.
    let text = "(define-fun UtilityWeight () Real\n  0.5)\n(define-fun Utility () Real\n  0.25)";
    assert_eq!(extract("Utility", text), Some(0.25));
    assert_eq!(extract("Util", text), None);
}

#[test]
fn test_non_numeric_value_is_unparseable() {
    assert_eq!(extract("TwoFactor", MODEL), None);
    assert_eq!(
        lookup("TwoFactor", MODEL),
        ModelLookup::Unparseable {
            line: "    true)".to_string()
        }
    );
}

#[test]
fn test_declaration_on_last_line() {
    let text = "sat\n(define-fun Utility () Real";
    assert_eq!(lookup("Utility", text), ModelLookup::MissingValueLine);
    assert_eq!(extract("Utility", text), None);
}

#[test]
fn test_first_declaration_wins() {
    let text = "(define-fun Utility () Real\n  0.1)\n(define-fun Utility () Real\n  0.9)";
    assert_eq!(extract("Utility", text), Some(0.1));
}

#[test]
fn test_first_declaration_wins_even_when_unparseable() {
    let text = "(define-fun Utility () Real\n  oops)\n(define-fun Utility () Real\n  0.9)";
    assert_eq!(extract("Utility", text), None);
}

#[test]
fn test_lookup_display() {
    assert_eq!(ModelLookup::Value(0.5).to_string(), "0.5");
    assert_eq!(ModelLookup::NotDeclared.to_string(), "not found in the model");
}

#[test]
fn test_extract_negated_values() {
    let text = "(define-fun Utility () Real\n    (- (/ 7.0 2.0)))\n(define-fun Cost () Real\n    (- 3.5))";
    assert_eq!(extract("Utility", text), Some(-3.5));
    assert_eq!(extract("Cost", text), Some(-3.5));
}
