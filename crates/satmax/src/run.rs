//! Config-driven entry points.

use std::path::Path;

use satmax_benchmark::{Benchmark, BenchmarkConfig, BenchmarkResult, CsvExporter, MarkdownReport};
use satmax_config::SatMaxConfig;
use satmax_core::{ConstraintSet, RoundLog};
use satmax_solver::{ConstraintSource, MaximizeOutcome, Maximizer, ScenarioDirectory, ScenarioId};
use tracing::info;

use crate::error::SatMaxError;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "satmax.toml";

/// Maximizes one scenario from `base` using `satmax.toml` when it exists,
/// defaults otherwise. A malformed `satmax.toml` is an error.
///
/// Returns the outcome together with the round log of the search.
pub fn maximize_scenario(
    base: impl AsRef<Path>,
    scenario: impl Into<ScenarioId>,
) -> Result<(MaximizeOutcome, RoundLog), SatMaxError> {
    #[cfg(feature = "console")]
    satmax_console::init();

    let config = SatMaxConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    config.validate()?;

    let constraints = ScenarioDirectory::new(base.as_ref()).load(&scenario.into())?;
    let mut maximizer = Maximizer::from_config(&config, constraints);
    let outcome = maximizer.maximize_configured(&config)?;
    let (_, _, log) = maximizer.into_parts();
    Ok((outcome, log))
}

/// Runs the `[benchmark]` section of `config` against process-backed solvers
/// and writes any configured CSV or Markdown reports.
pub fn run_benchmark(config: &SatMaxConfig) -> Result<Vec<BenchmarkResult>, SatMaxError> {
    #[cfg(feature = "console")]
    satmax_console::init();

    config.validate()?;
    let settings = &config.benchmark;
    let bench_config = BenchmarkConfig::from_settings("SatMax", settings);
    let benchmark = Benchmark::new(
        bench_config,
        ScenarioDirectory::new(&settings.scenario_dir),
        |constraints: ConstraintSet| Maximizer::from_config(config, constraints),
    );

    let scenarios: Vec<ScenarioId> = settings.scenarios.iter().copied().map(ScenarioId::from).collect();
    let results = benchmark.run_all(&scenarios)?;

    if let Some(path) = &settings.csv_output {
        CsvExporter::to_file(&results, path)?;
        info!(path = %path.display(), "wrote CSV results");
    }
    if let Some(path) = &settings.markdown_output {
        MarkdownReport::to_file(&results, path)?;
        info!(path = %path.display(), "wrote Markdown report");
    }
    Ok(results)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use satmax_test::scenario::{write_scenario, write_solver_script, CAPPED_UTILITY};
    use satmax_test::{sat_response, UNSAT_RESPONSE};

    fn config_with_script(dir: &Path, response: &str) -> SatMaxConfig {
        let script = write_solver_script(dir, "solver.sh", response).unwrap();
        let mut config = SatMaxConfig::new().with_command("sh");
        config.oracle.args = vec![script.display().to_string()];
        config.benchmark.scenario_dir = dir.to_path_buf();
        config.benchmark.scenarios = vec![1];
        config.benchmark.runs = 2;
        config
    }

    #[test]
    fn test_run_benchmark_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        write_scenario(dir.path(), "1", CAPPED_UTILITY).unwrap();
        let mut config = config_with_script(dir.path(), &sat_response("0.9"));
        config.benchmark.csv_output = Some(dir.path().join("bench.csv"));
        config.benchmark.markdown_output = Some(dir.path().join("bench.md"));

        let results = run_benchmark(&config).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].run_count(), 2);
        // Always feasible: every run stops at the upper bound.
        assert_eq!(results[0].max_utility(), 0.8);

        let csv = std::fs::read_to_string(dir.path().join("bench.csv")).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(dir.path().join("bench.md").exists());
    }

    #[test]
    fn test_run_benchmark_reports_infeasible_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write_scenario(dir.path(), "1", CAPPED_UTILITY).unwrap();
        let config = config_with_script(dir.path(), UNSAT_RESPONSE);

        let err = run_benchmark(&config).unwrap_err();
        assert!(matches!(err, SatMaxError::Benchmark(_)));
        assert!(err.to_string().contains("UNSAT"));
    }

    #[test]
    fn test_run_benchmark_rejects_invalid_config() {
        let mut config = SatMaxConfig::new();
        config.benchmark.runs = 0;
        assert!(matches!(run_benchmark(&config), Err(SatMaxError::Config(_))));
    }
}
