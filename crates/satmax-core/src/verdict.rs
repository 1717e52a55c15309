//! Oracle verdicts.

use std::fmt;

/// Outcome of one feasibility query.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// At least one satisfying assignment exists.
    Feasible {
        /// Value of the objective in the returned model, when it could be decoded.
        model_utility: Option<f64>,
        /// Full solver response, including the model.
        model: String,
    },
    /// No satisfying assignment exists.
    Infeasible,
}

impl Verdict {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub fn kind(&self) -> VerdictKind {
        match self {
            Self::Feasible { .. } => VerdictKind::Sat,
            Self::Infeasible => VerdictKind::Unsat,
        }
    }

    pub fn model_utility(&self) -> Option<f64> {
        match self {
            Self::Feasible { model_utility, .. } => *model_utility,
            Self::Infeasible => None,
        }
    }
}

/// Verdict without its payload, as stored in round records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerdictKind {
    Sat,
    Unsat,
}

impl VerdictKind {
    pub fn is_sat(self) -> bool {
        self == Self::Sat
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sat => f.write_str("SAT"),
            Self::Unsat => f.write_str("UNSAT"),
        }
    }
}
