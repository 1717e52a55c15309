#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

use satmax_test::scenario::{write_scenario, write_solver_script, CAPPED_UTILITY};
use satmax_test::{SatResponse, UNSAT_RESPONSE};

fn satmax(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_satmax"))
        .args(args)
        .arg("--plain")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute satmax")
}

// Scenario 1 plus a config whose solver always prints `response`.
fn workspace(response: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_scenario(dir.path(), "1", CAPPED_UTILITY).unwrap();
    let script = write_solver_script(dir.path(), "solver.sh", response).unwrap();
    let config = format!(
        "[oracle]\ncommand = \"sh\"\nargs = [{:?}]\n\n[benchmark]\nruns = 2\nscenarios = [1]\n",
        script.display().to_string()
    );
    std::fs::write(dir.path().join("satmax.toml"), config).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn maximize_with_feasible_upper_bound_reports_model() {
    let response = SatResponse::new()
        .real("Utility", "0.95")
        .real("Security", "(/ 3.0 4.0)")
        .build();
    let dir = workspace(&response);

    let output = satmax(
        dir.path(),
        &["maximize", "1", "--var", "Security", "--var", "Iris", "--print-model"],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("round  1: requested >= 0.000000, status=SAT, model Utility=0.95"));
    assert!(text.contains("round  2: requested >= 1.000000, status=SAT"));
    assert!(text.contains("Final Utility (best threshold): 1"));
    assert!(text.contains("Security: 0.75"));
    assert!(text.contains("Iris: not found in the model"));
    assert!(text.contains("(define-fun Utility () Real"));
}

#[test]
fn maximize_infeasible_lower_bound_exits_with_error() {
    let dir = workspace(UNSAT_RESPONSE);

    let output = satmax(dir.path(), &["maximize", "1", "--min", "0.2", "--max", "0.8"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("UNSAT even for Utility > 0.2"), "stderr={err}");
    assert!(err.contains("round 1"));
}

#[test]
fn maximize_missing_scenario_names_path() {
    let dir = workspace(UNSAT_RESPONSE);

    let output = satmax(dir.path(), &["maximize", "9"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("model-zu-9.txt"));
}

#[test]
fn maximize_rejects_inverted_interval() {
    let dir = workspace(UNSAT_RESPONSE);

    let output = satmax(dir.path(), &["maximize", "1", "--min", "0.9", "--max", "0.1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("search.min"));
}

#[test]
fn maximize_reports_solver_failure() {
    let dir = workspace(UNSAT_RESPONSE);

    let output = satmax(dir.path(), &["maximize", "1", "--solver", "satmax-no-such-solver"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("round 1"), "stderr={err}");
    assert!(err.contains("satmax-no-such-solver"));
}

#[test]
fn bench_prints_summary_and_writes_csv() {
    let dir = workspace(&SatResponse::new().real("Utility", "0.9").build());

    let output = satmax(dir.path(), &["bench", "--csv", "results.csv"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("=== Scenario 1: 2 runs ==="));
    assert!(text.contains("run  2: Utility=0.800"));
    assert!(text.contains("Scenario | Runs | Time_min(ms)"));

    let csv = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
    assert!(csv.starts_with("scenario,run_index"));
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = workspace(UNSAT_RESPONSE);

    let output = satmax(dir.path(), &["maximize", "1", "--config", "nope.toml"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_default_config_is_an_error() {
    let dir = workspace(UNSAT_RESPONSE);
    std::fs::write(dir.path().join("satmax.toml"), "[oracle\ncommand = ").unwrap();

    let output = satmax(dir.path(), &["maximize", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("TOML parse error"), "stderr={}", stderr(&output));
}
