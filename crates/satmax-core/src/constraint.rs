//! The base constraint definition handed to the oracle.

use std::fmt;
use std::sync::Arc;

/// Opaque SMT-LIB text declaring all decision variables and base constraints.
///
/// The text is expected to declare the objective variable (`Utility` by
/// default) without bounding it, and feasibility of `objective > t` must be
/// non-increasing in `t`. Binary search relies on that monotonicity and does
/// not verify it; a non-monotonic set can converge to a local maximum.
///
/// Cloning is cheap: the text is shared, never copied.
///
/// # Example
///
/// ```
/// use satmax_core::ConstraintSet;
///
/// let set = ConstraintSet::new("(declare-const Utility Real)");
/// assert!(set.as_str().contains("Utility"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    text: Arc<str>,
}

impl ConstraintSet {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("bytes", &self.text.len())
            .finish()
    }
}

impl From<String> for ConstraintSet {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ConstraintSet {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
