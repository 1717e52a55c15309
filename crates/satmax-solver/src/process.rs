//! Solver invocation over stdin/stdout.

use std::io::{self, Read, Write};
use std::process::{Child, ChildStderr, ChildStdout, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use satmax_config::OracleConfig;
use satmax_core::{Exchange, ExchangeError, Exchanged};
use tracing::{debug, trace, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs one solver process per query.
///
/// The query is written to the child's stdin, which is then closed; stdout
/// and stderr are drained concurrently so a large model cannot block the
/// child on a full pipe. A non-zero exit status is not an error by itself:
/// z3 exits with 1 when `(get-model)` follows an `unsat` answer.
///
/// # Example
///
/// ```
/// use satmax_solver::ProcessExchange;
/// use std::time::Duration;
///
/// let exchange = ProcessExchange::z3().with_timeout(Duration::from_secs(30));
/// assert_eq!(exchange.command(), "z3");
/// assert_eq!(exchange.args(), ["-smt2", "-st", "-in"]);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessExchange {
    command: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessExchange {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// z3 reading SMT-LIB 2 from stdin, printing statistics.
    pub fn z3() -> Self {
        Self::new("z3").with_args(["-smt2", "-st", "-in"])
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Kills the solver, together with anything it started, if it has not
    /// exited after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn spawn(&self) -> Result<Child, ExchangeError> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // Own process group, so a timeout also reaches wrapper descendants
        // that hold the output pipes open.
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut command, 0);
        command
            .spawn()
            .map_err(|source| ExchangeError::Spawn {
                command: self.command.clone(),
                source,
            })
    }

    // Returns `None` when the child was killed for exceeding the timeout.
    fn wait(&self, child: &mut Child) -> io::Result<Option<ExitStatus>> {
        let Some(timeout) = self.timeout else {
            return child.wait().map(Some);
        };

        let start = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if start.elapsed() >= timeout {
                warn!(command = %self.command, ?timeout, "solver timed out, killing it");
                kill_tree(child);
                let _ = child.wait();
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for ProcessExchange {
    fn default() -> Self {
        Self::z3()
    }
}

impl Exchange for ProcessExchange {
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError> {
        trace!(command = %self.command, bytes = input.len(), "spawning solver");
        let mut child = self.spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("solver stdin was not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("solver stdout was not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("solver stderr was not captured"))?;

        thread::scope(|s| {
            let writer = s.spawn(move || -> io::Result<()> {
                // Dropping stdin at the end of this closure sends EOF.
                match stdin.write_all(input.as_bytes()) {
                    // The solver may exit before reading everything, e.g. on a parse error.
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                    other => other,
                }
            });
            let out_reader = s.spawn(move || drain_stdout(stdout));
            let err_reader = s.spawn(move || drain_stderr(stderr));

            let status = self.wait(&mut child)?;

            join(writer)??;
            let stdout = join(out_reader)??;
            let stderr = join(err_reader)??;

            match status {
                None => Err(ExchangeError::Timeout(self.timeout.unwrap_or_default())),
                Some(status) => {
                    debug!(
                        command = %self.command,
                        exit_code = status.code(),
                        stdout_bytes = stdout.len(),
                        stderr_bytes = stderr.len(),
                        "solver finished"
                    );
                    Ok(Exchanged { stdout, stderr })
                }
            }
        })
    }
}

#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    match libc::pid_t::try_from(child.id()) {
        // SAFETY: `kill` has no memory-safety preconditions; a negative pid
        // addresses the process group created in `spawn`.
        Ok(pgid) => unsafe {
            libc::kill(-pgid, libc::SIGKILL);
        },
        Err(_) => {
            let _ = child.kill();
        }
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    let _ = child.kill();
}

fn drain_stdout(mut pipe: ChildStdout) -> io::Result<String> {
    let mut buf = String::new();
    pipe.read_to_string(&mut buf)?;
    Ok(buf)
}

fn drain_stderr(mut pipe: ChildStderr) -> io::Result<String> {
    let mut buf = String::new();
    pipe.read_to_string(&mut buf)?;
    Ok(buf)
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> io::Result<T> {
    handle
        .join()
        .map_err(|_| io::Error::other("solver pipe thread panicked"))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_stdin_through_cat() {
        let mut exchange = ProcessExchange::new("cat");
        let out = exchange.exchange("sat\n(model)\n").unwrap();
        assert_eq!(out.stdout, "sat\n(model)\n");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_captures_stderr() {
        let mut exchange = ProcessExchange::new("sh").with_args(["-c", "cat >/dev/null; echo oops >&2"]);
        let out = exchange.exchange("(check-sat)").unwrap();
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let mut exchange = ProcessExchange::new("sh").with_args(["-c", "cat; exit 1"]);
        let out = exchange.exchange("unsat\n").unwrap();
        assert_eq!(out.stdout, "unsat\n");
    }

    #[test]
    fn test_missing_command_is_spawn_error() {
        let mut exchange = ProcessExchange::new("satmax-definitely-not-a-solver");
        let err = exchange.exchange("(check-sat)").unwrap_err();
        assert!(matches!(err, ExchangeError::Spawn { .. }));
    }

    #[test]
    fn test_timeout_kills_solver() {
        let mut exchange = ProcessExchange::new("sleep")
            .with_args(["5"])
            .with_timeout(Duration::from_millis(50));
        let started = Instant::now();
        let err = exchange.exchange("").unwrap_err();
        assert!(matches!(err, ExchangeError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_timeout_reaches_wrapped_solver() {
        // `sh` forks `sleep`, which keeps stdout open after `sh` is killed.
        let mut exchange = ProcessExchange::new("sh")
            .with_args(["-c", "sleep 4; echo sat"])
            .with_timeout(Duration::from_millis(50));
        let started = Instant::now();
        let err = exchange.exchange("").unwrap_err();
        assert!(matches!(err, ExchangeError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_fast_solver_within_timeout() {
        let mut exchange = ProcessExchange::new("sh")
            .with_args(["-c", "cat >/dev/null; echo sat"])
            .with_timeout(Duration::from_secs(5));
        let out = exchange.exchange("(check-sat)").unwrap();
        assert_eq!(out.stdout.trim(), "sat");
    }

    #[test]
    fn test_from_config() {
        let config = OracleConfig {
            command: "cvc5".to_string(),
            args: vec!["--lang".to_string(), "smt2".to_string()],
            timeout_secs: 3,
            objective: "Utility".to_string(),
        };
        let exchange = ProcessExchange::from_config(&config);
        assert_eq!(exchange.command(), "cvc5");
        assert_eq!(exchange.args(), ["--lang", "smt2"]);
        assert_eq!(exchange.timeout(), Some(Duration::from_secs(3)));
    }
}
