//! Tests for SatMax configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [oracle]
        command = "/opt/z3/bin/z3"
        args = ["-smt2", "-in"]
        timeout_secs = 10
        objective = "Score"

        [search]
        min = 0.1
        max = 0.9
        eps = 0.005

        [benchmark]
        runs = 5
        scenarios = [4, 5]
        scenario_dir = "models"
    "#;

    let config = SatMaxConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.oracle.command, "/opt/z3/bin/z3");
    assert_eq!(config.oracle.args, vec!["-smt2", "-in"]);
    assert_eq!(config.oracle.timeout(), Some(Duration::from_secs(10)));
    assert_eq!(config.oracle.objective, "Score");
    assert_eq!(config.search, SearchConfig { min: 0.1, max: 0.9, eps: 0.005 });
    assert_eq!(config.benchmark.runs, 5);
    assert_eq!(config.benchmark.scenarios, vec![4, 5]);
    assert_eq!(config.benchmark.scenario_dir, PathBuf::from("models"));
    // Unspecified benchmark fields keep their defaults.
    assert_eq!(config.benchmark.eps, 0.01);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        oracle:
          command: z3
          timeout_secs: 0
        search:
          min: 0.0
          max: 2.0
          eps: 0.01
    "#;

    let config = SatMaxConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.oracle.timeout(), None);
    assert_eq!(config.search.max, 2.0);
    assert_eq!(config.oracle.args, vec!["-smt2", "-st", "-in"]);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SatMaxConfig::from_toml_str("").unwrap();
    assert_eq!(config, SatMaxConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SatMaxConfig::new()
        .with_command("cvc5")
        .with_timeout_secs(60)
        .with_search(0.2, 0.8, 0.01);

    assert_eq!(config.oracle.command, "cvc5");
    assert_eq!(config.oracle.timeout(), Some(Duration::from_secs(60)));
    assert_eq!(config.search.min, 0.2);
}

#[test]
fn test_validate_rejects_inverted_interval() {
    let config = SatMaxConfig::new().with_search(1.0, 0.0, 0.01);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("search.min"));
}

#[test]
fn test_validate_rejects_non_positive_eps() {
    let config = SatMaxConfig::new().with_search(0.0, 1.0, 0.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_empty_command() {
    let config = SatMaxConfig::new().with_command("  ");
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_runs() {
    let mut config = SatMaxConfig::new();
    config.benchmark.runs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_path = dir.path().join("satmax.yaml");
    std::fs::write(&yaml_path, "search:\n  eps: 0.5\n").unwrap();
    let toml_path = dir.path().join("satmax.toml");
    std::fs::write(&toml_path, "[search]\neps = 0.25\n").unwrap();

    assert_eq!(SatMaxConfig::load(&yaml_path).unwrap().search.eps, 0.5);
    assert_eq!(SatMaxConfig::load(&toml_path).unwrap().search.eps, 0.25);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = SatMaxConfig::load("/nonexistent/satmax.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = SatMaxConfig::load_or_default(dir.path().join("satmax.toml")).unwrap();
    assert_eq!(config, SatMaxConfig::default());
}

#[test]
fn test_load_or_default_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("satmax.toml");
    std::fs::write(&path, "[search\nmin = ").unwrap();
    let err = SatMaxConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("satmax.toml");
    std::fs::write(&path, "[oracle]\ncommand = \"cvc5\"\n").unwrap();
    assert_eq!(SatMaxConfig::load_or_default(&path).unwrap().oracle.command, "cvc5");
}
