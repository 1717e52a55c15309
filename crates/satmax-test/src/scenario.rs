//! Constraint set fixtures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A small constraint set whose `Utility` is feasible strictly below 0.6.
pub const CAPPED_UTILITY: &str = "\
(declare-const Utility Real)
(declare-const Security Real)
(declare-const Usability Real)
(assert (and (>= Security 0.0) (<= Security 1.0)))
(assert (and (>= Usability 0.0) (<= Usability 1.0)))
(assert (= Utility (* 0.6 (/ (+ Security Usability) 2.0))))
(assert (< Security 1.0))
";

/// Writes `text` as `<base>/Scenario<id>/model-zu-<id>.txt` and returns its path.
pub fn write_scenario(base: &Path, id: &str, text: &str) -> io::Result<PathBuf> {
    let dir = base.join(format!("Scenario{}", id));
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("model-zu-{}.txt", id));
    fs::write(&path, text)?;
    Ok(path)
}

/// Writes a POSIX shell script that drains stdin and prints `response`.
///
/// Run it as `sh <path>` to stand in for a solver process whose answer
/// never changes.
pub fn write_solver_script(dir: &Path, name: &str, response: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    let mut script = String::from("#!/bin/sh\ncat >/dev/null\ncat <<'SATMAX_EOF'\n");
    script.push_str(response);
    if !response.ends_with('\n') {
        script.push('\n');
    }
    script.push_str("SATMAX_EOF\n");
    fs::write(&path, script)?;
    Ok(path)
}
