//! Text exchange with an external solver.
//!
//! The oracle only depends on a synchronous text-in/text-out round trip.
//! How the solver is launched, configured or terminated lives behind
//! [`Exchange`]; test doubles implement it with scripted responses.

use crate::error::ExchangeError;

/// Raw output of one solver invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchanged {
    pub stdout: String,
    pub stderr: String,
}

impl Exchanged {
    /// Creates an exchange result with the given stdout and an empty stderr.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// One blocking query/response round trip with a solver.
pub trait Exchange {
    /// Sends `input` to the solver and waits for its complete response.
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError>;
}

impl<E: Exchange + ?Sized> Exchange for &mut E {
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError> {
        (**self).exchange(input)
    }
}

impl<E: Exchange + ?Sized> Exchange for Box<E> {
    fn exchange(&mut self, input: &str) -> Result<Exchanged, ExchangeError> {
        (**self).exchange(input)
    }
}
