//! Constraint set loading.
//!
//! Scenarios live in a base directory as `Scenario<id>/model-zu-<id>.txt`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use satmax_core::{ConstraintSet, LoadError};
use tracing::debug;

/// Identifier of a scenario, usually a small number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScenarioId(String);

impl ScenarioId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ScenarioId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ScenarioId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ScenarioId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Source of constraint sets keyed by scenario.
pub trait ConstraintSource {
    fn load(&self, scenario: &ScenarioId) -> Result<ConstraintSet, LoadError>;
}

/// Scenario folders under one base directory.
///
/// # Example
///
/// ```
/// use satmax_solver::{ScenarioDirectory, ScenarioId};
/// use std::path::Path;
///
/// let dir = ScenarioDirectory::new("models");
/// assert_eq!(
///     dir.path_for(&ScenarioId::from(2)),
///     Path::new("models/Scenario2/model-zu-2.txt")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioDirectory {
    base: PathBuf,
}

impl ScenarioDirectory {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn path_for(&self, scenario: &ScenarioId) -> PathBuf {
        self.base
            .join(format!("Scenario{}", scenario))
            .join(format!("model-zu-{}.txt", scenario))
    }
}

impl ConstraintSource for ScenarioDirectory {
    fn load(&self, scenario: &ScenarioId) -> Result<ConstraintSet, LoadError> {
        load_constraint_file(self.path_for(scenario))
    }
}

/// Reads a constraint set from a file.
///
/// # Errors
///
/// A missing file is [`LoadError::ResourceNotFound`]; any other read
/// failure is [`LoadError::Io`].
pub fn load_constraint_file(path: impl AsRef<Path>) -> Result<ConstraintSet, LoadError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "loaded constraint set");
            Ok(ConstraintSet::new(text))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satmax_test::scenario::{write_scenario, CAPPED_UTILITY};

    #[test]
    fn test_loads_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        write_scenario(dir.path(), "3", CAPPED_UTILITY).unwrap();

        let source = ScenarioDirectory::new(dir.path());
        let set = source.load(&ScenarioId::from(3)).unwrap();
        assert_eq!(set.as_str(), CAPPED_UTILITY);
    }

    #[test]
    fn test_missing_scenario_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = ScenarioDirectory::new(dir.path());

        let err = source.load(&ScenarioId::from("7")).unwrap_err();
        match err {
            LoadError::ResourceNotFound { path } => {
                assert!(path.ends_with("Scenario7/model-zu-7.txt"));
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_constraint_file(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
