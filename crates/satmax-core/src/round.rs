//! Audit trail of oracle queries.
//!
//! Every query issued by a maximizer produces one [`RoundRecord`], handed to
//! an injected [`RoundCollector`]. [`RoundLog`] is the plain append-only
//! collector; [`SharedRoundLog`] lets several sequential writers share one log.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::threshold::Threshold;
use crate::verdict::VerdictKind;

/// Record of one oracle query and its outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    /// 1-based issuance index.
    pub index: u64,
    /// Threshold `t` of the query `Utility > t`.
    pub requested_threshold: Threshold,
    /// Objective value in the returned model, if feasible and decodable.
    pub model_utility: Option<f64>,
    pub verdict: VerdictKind,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {:2}: requested >= {:.6}, status={}, model Utility=",
            self.index, self.requested_threshold, self.verdict
        )?;
        match self.model_utility {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("None"),
        }
    }
}

/// Sink for round records.
pub trait RoundCollector {
    /// Appends one record. Records arrive in issuance order.
    fn record(&mut self, round: RoundRecord);
}

impl<C: RoundCollector + ?Sized> RoundCollector for &mut C {
    fn record(&mut self, round: RoundRecord) {
        (**self).record(round);
    }
}

/// Append-only, ordered list of round records.
///
/// # Example
///
/// ```
/// use satmax_core::{RoundCollector, RoundLog, RoundRecord, VerdictKind};
///
/// let mut log = RoundLog::new();
/// log.record(RoundRecord {
///     index: 1,
///     requested_threshold: 0.0,
///     model_utility: Some(0.4),
///     verdict: VerdictKind::Sat,
/// });
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.last().unwrap().verdict, VerdictKind::Sat);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundLog {
    rounds: Vec<RoundRecord>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoundRecord> {
        self.rounds.iter()
    }

    pub fn as_slice(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    /// Number of feasible rounds recorded.
    pub fn sat_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.verdict.is_sat()).count()
    }

    /// Discards all records.
    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

impl RoundCollector for RoundLog {
    fn record(&mut self, round: RoundRecord) {
        self.rounds.push(round);
    }
}

impl<'a> IntoIterator for &'a RoundLog {
    type Item = &'a RoundRecord;
    type IntoIter = std::slice::Iter<'a, RoundRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

/// A [`RoundLog`] behind a mutex, cloneable across owners.
///
/// Writers take the lock for one record at a time, so each record is
/// appended whole.
#[derive(Debug, Clone, Default)]
pub struct SharedRoundLog {
    inner: Arc<Mutex<RoundLog>>,
}

impl SharedRoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the log for reading or clearing.
    pub fn lock(&self) -> MutexGuard<'_, RoundLog> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copies the current records.
    pub fn snapshot(&self) -> RoundLog {
        self.lock().clone()
    }
}

impl RoundCollector for SharedRoundLog {
    fn record(&mut self, round: RoundRecord) {
        self.lock().record(round);
    }
}
