//! The run-length movement policy.

use std::fmt;

use crate::error::PolicyError;

/// Inclusive bounds on how many consecutive cells a mover must travel in a
/// straight line before it is permitted to turn.
///
/// Immutable; shared read-only by every edge-generation call of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementPolicy {
    min_run: i32,
    max_run: i32,
}

impl MovementPolicy {
    /// Create a policy with the given run bounds.
    ///
    /// Fails unless `1 <= min_run <= max_run`.
    pub fn new(min_run: i32, max_run: i32) -> Result<Self, PolicyError> {
        if min_run < 1 || max_run < min_run {
            return Err(PolicyError::InvalidPolicy { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    /// The tight regime: turn after 1 to 3 cells.
    pub const fn tight() -> Self {
        Self {
            min_run: 1,
            max_run: 3,
        }
    }

    /// The loose regime: turn after 4 to 10 cells.
    pub const fn loose() -> Self {
        Self {
            min_run: 4,
            max_run: 10,
        }
    }

    /// Minimum legal run length.
    #[inline]
    pub const fn min_run(self) -> i32 {
        self.min_run
    }

    /// Maximum legal run length.
    #[inline]
    pub const fn max_run(self) -> i32 {
        self.max_run
    }
}

impl fmt::Display for MovementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "runs of {}..={}", self.min_run, self.max_run)
    }
}
