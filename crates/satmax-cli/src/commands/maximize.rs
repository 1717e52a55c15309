//! `satmax maximize`: one search, then a report of the best model.

use std::io::{self, Write};

use satmax::{
    ConstraintSource, MaximizeOutcome, Maximizer, RoundLog, SatMaxConfig, SatMaxError,
    ScenarioDirectory, ScenarioId,
};

use crate::cli::{MaximizeArgs, DEFAULT_VARIABLES};

pub(crate) fn run(args: &MaximizeArgs, mut config: SatMaxConfig) -> Result<(), SatMaxError> {
    if let Some(solver) = &args.solver {
        config.oracle.command = solver.clone();
    }
    let search = &mut config.search;
    search.min = args.min.unwrap_or(search.min);
    search.max = args.max.unwrap_or(search.max);
    search.eps = args.eps.unwrap_or(search.eps);
    config.validate()?;

    let scenario = ScenarioId::from(args.scenario.as_str());
    let constraints = ScenarioDirectory::new(&args.dir).load(&scenario)?;

    let mut maximizer = Maximizer::from_config(&config, constraints);
    let outcome = maximizer.maximize_configured(&config)?;

    let vars: Vec<&str> = if args.vars.is_empty() {
        DEFAULT_VARIABLES.to_vec()
    } else {
        args.vars.iter().map(String::as_str).collect()
    };

    let mut out = io::stdout().lock();
    write_report(&mut out, maximizer.collector(), &outcome, &vars, args.print_model)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    log: &RoundLog,
    outcome: &MaximizeOutcome,
    vars: &[&str],
    print_model: bool,
) -> io::Result<()> {
    writeln!(out, "\n=== Search summary ===")?;
    for record in log {
        writeln!(out, "{}", record)?;
    }

    writeln!(out, "\nFinal Utility (best threshold): {}\n", outcome.best)?;

    for name in vars {
        writeln!(out, "{}: {}", name, outcome.lookup(name))?;
    }

    if print_model {
        if let Some(model) = &outcome.model {
            writeln!(out, "\n{}", model.trim_end())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use satmax::{RoundCollector, RoundRecord, VerdictKind};
    use satmax_test::SatResponse;
    use std::time::Duration;

    fn outcome() -> MaximizeOutcome {
        MaximizeOutcome {
            best: 0.594,
            model: Some(
                SatResponse::new()
                    .real("Utility", "(/ 597.0 1000.0)")
                    .int("PinLeng", 6)
                    .bool("TwoFactor", true)
                    .build(),
            ),
            model_utility: Some(0.597),
            rounds: 2,
            shortcut: false,
            elapsed: Duration::from_millis(3),
        }
    }

    fn log() -> RoundLog {
        let mut log = RoundLog::new();
        log.record(RoundRecord {
            index: 1,
            requested_threshold: 0.0,
            model_utility: Some(0.3),
            verdict: VerdictKind::Sat,
        });
        log.record(RoundRecord {
            index: 2,
            requested_threshold: 1.0,
            model_utility: None,
            verdict: VerdictKind::Unsat,
        });
        log
    }

    fn render(vars: &[&str], print_model: bool) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &log(), &outcome(), vars, print_model).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_lists_rounds_and_best() {
        let text = render(&[], false);
        assert!(text.contains(
            "round  1: requested >= 0.000000, status=SAT, model Utility=0.3"
        ));
        assert!(text.contains(
            "round  2: requested >= 1.000000, status=UNSAT, model Utility=None"
        ));
        assert!(text.contains("Final Utility (best threshold): 0.594"));
    }

    #[test]
    fn test_report_variables() {
        let text = render(&["PinLeng", "TwoFactor", "Iris"], false);
        assert!(text.contains("PinLeng: 6\n"));
        assert!(text.contains("TwoFactor: could not parse value from line:"));
        assert!(text.contains("Iris: not found in the model"));
    }

    #[test]
    fn test_report_model_only_on_request() {
        assert!(!render(&[], false).contains("define-fun"));
        assert!(render(&[], true).contains("(define-fun PinLeng () Int"));
    }
}
