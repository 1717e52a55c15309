//! Tests for the decision oracle.

use super::*;
use satmax_core::{ExchangeError, VerdictKind};
use satmax_test::{sat_response, CutoffExchange, SatResponse, ScriptedExchange, UNSAT_RESPONSE};

fn constraints() -> ConstraintSet {
    ConstraintSet::new("(declare-const Utility Real)\n(assert (<= Utility 1.0))")
}

#[test]
fn test_build_query_appends_assertion() {
    let query = build_query(&constraints(), "Utility", 0.55);
    assert_eq!(
        query,
        "(declare-const Utility Real)\n(assert (<= Utility 1.0))\n\
         (assert (> Utility 0.55 ))\n(check-sat)\n(get-model)\n"
    );
}

#[test]
fn test_build_query_renders_integral_and_negative_thresholds() {
    let set = ConstraintSet::new("");
    assert!(build_query(&set, "Utility", 1.0).contains("(assert (> Utility 1.0 ))"));
    assert!(build_query(&set, "Utility", -0.5).contains("(assert (> Utility (- 0.5) ))"));
}

#[test]
fn test_classify_unsat_before_sat() {
    let verdict = classify("Utility", Exchanged::stdout(UNSAT_RESPONSE)).unwrap();
    assert_eq!(verdict, Verdict::Infeasible);
}

#[test]
fn test_classify_sat_extracts_objective() {
    let verdict = classify("Utility", Exchanged::stdout(sat_response("0.75"))).unwrap();
    assert_eq!(verdict.kind(), VerdictKind::Sat);
    assert_eq!(verdict.model_utility(), Some(0.75));
}

#[test]
fn test_classify_sat_with_rational_objective() {
    let verdict = classify("Utility", Exchanged::stdout(sat_response("(/ 3.0 4.0)"))).unwrap();
    assert_eq!(verdict.model_utility(), Some(0.75));
}

#[test]
fn test_classify_sat_without_objective_in_model() {
    let stdout = SatResponse::new().real("Security", "0.5").build();
    let verdict = classify("Utility", Exchanged::stdout(stdout.clone())).unwrap();
    assert_eq!(
        verdict,
        Verdict::Feasible {
            model_utility: None,
            model: stdout,
        }
    );
}

#[test]
fn test_classify_stderr_is_solver_error() {
    let response = Exchanged::new("", "(error \"line 3 column 1: unknown constant Foo\")\n");
    let err = classify("Utility", response).unwrap_err();
    match err {
        OracleError::Solver { stderr } => assert!(stderr.contains("unknown constant")),
        other => panic!("expected solver error, got {other:?}"),
    }
}

#[test]
fn test_classify_silence_is_protocol_error() {
    let err = classify("Utility", Exchanged::new("unknown\n", "  \n")).unwrap_err();
    assert!(matches!(err, OracleError::Protocol { .. }));
}

#[test]
fn test_query_uses_custom_objective() {
    let stdout = SatResponse::new().real("Score", "2.5").build();
    let mut oracle = DecisionOracle::new(ScriptedExchange::new().then_stdout(stdout))
        .with_objective("Score");

    let verdict = oracle.query(&constraints(), 2.0).unwrap();
    assert_eq!(verdict.model_utility(), Some(2.5));
    assert!(oracle.exchange().queries()[0].contains("(assert (> Score 2.0 ))"));
}

#[test]
fn test_query_propagates_exchange_failure() {
    let exchange = ScriptedExchange::new().then_error(ExchangeError::Timeout(
        std::time::Duration::from_secs(1),
    ));
    let mut oracle = DecisionOracle::new(exchange);
    let err = oracle.query(&constraints(), 0.5).unwrap_err();
    assert!(matches!(
        err,
        OracleError::Exchange(ExchangeError::Timeout(_))
    ));
}

#[test]
fn test_feasibility_is_monotone_over_threshold_grid() {
    for cutoff in [-0.35, 0.0, 0.6, 0.999] {
        let mut oracle = DecisionOracle::new(CutoffExchange::new(cutoff));
        let grid: Vec<f64> = (0..=40).map(|i| -1.0 + f64::from(i) * 0.05).collect();

        let feasible: Vec<bool> = grid
            .iter()
            .map(|&t| oracle.query(&constraints(), t).unwrap().is_feasible())
            .collect();

        for (j, &t2) in grid.iter().enumerate() {
            if feasible[j] {
                for (i, &t1) in grid[..j].iter().enumerate() {
                    assert!(feasible[i], "cutoff {cutoff}: feasible at {t2} but not at {t1}");
                }
            }
        }
        // The sweep crosses the cutoff, so both verdicts occur.
        assert!(feasible.first().copied().unwrap_or(false));
        assert!(!feasible.last().copied().unwrap_or(true));
    }
}
