//! SatMax - maximize an SMT objective with a satisfiability oracle
//!
//! The objective variable (`Utility` by default) is maximized by binary
//! search: each round asks the external solver whether
//! `Utility > t` is satisfiable together with the scenario's constraints.
//!
//! # Example
//!
//! ```rust
//! use satmax::prelude::*;
//! use satmax_test::CutoffExchange;
//!
//! let oracle = DecisionOracle::new(CutoffExchange::new(0.6));
//! let constraints = ConstraintSet::new("(declare-const Utility Real)");
//! let mut maximizer = Maximizer::new(oracle, constraints, RoundLog::new());
//!
//! let outcome = maximizer.maximize(0.0, 1.0, 0.001).unwrap();
//! assert!(outcome.best > 0.59 && outcome.best <= 0.6);
//! ```

pub use satmax_core::{
    extract, lookup, parse_numeric, round3, ConstraintSet, Exchange, ExchangeError, Exchanged,
    LoadError, MaximizeError, ModelLookup, OracleError, RoundCollector, RoundLog, RoundRecord,
    SharedRoundLog, SmtReal, Threshold, Verdict, VerdictKind,
};

pub use satmax_config::{BenchmarkSettings, ConfigError, OracleConfig, SatMaxConfig, SearchConfig};

pub use satmax_solver::{
    load_constraint_file, ConstraintSource, DecisionOracle, MaximizeOutcome, Maximizer,
    ProcessExchange, ScenarioDirectory, ScenarioId,
};

pub use satmax_benchmark::{
    Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, BenchmarkRun, CsvExporter,
    MarkdownReport, SummaryTable,
};

#[cfg(feature = "console")]
pub use satmax_console as console;

mod error;
mod run;

pub use error::SatMaxError;
pub use run::{maximize_scenario, run_benchmark, DEFAULT_CONFIG_FILE};

pub mod prelude {
    pub use super::{
        ConstraintSet, ConstraintSource, DecisionOracle, MaximizeError, MaximizeOutcome,
        Maximizer, ModelLookup, ProcessExchange, RoundLog, SatMaxConfig, SatMaxError,
        ScenarioDirectory, ScenarioId,
    };
}
