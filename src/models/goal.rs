//! Savings goal model
//!
//! A goal is a named savings target. Funds reach a goal only through the
//! allocation in [`crate::services::GoalService::fund`], which caps every
//! transfer at [`Goal::remaining`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A named savings target with accumulated progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Display name, also the key transactions use to reference the goal
    pub name: String,

    /// Amount to reach; `None` is an open-ended savings jar
    pub target: Option<Money>,

    /// Amount allocated so far
    #[serde(default)]
    pub current: Money,
}

impl Goal {
    /// Create a goal with nothing allocated yet
    pub fn new(name: impl Into<String>, target: Option<Money>) -> Self {
        Self {
            name: name.into(),
            target,
            current: Money::zero(),
        }
    }

    /// Create an open-ended goal
    pub fn jar(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Amount still needed to reach the target
    ///
    /// Returns `None` for open-ended goals, which can absorb any amount.
    pub fn remaining(&self) -> Option<Money> {
        self.target
            .map(|target| std::cmp::max(target - self.current, Money::zero()))
    }

    /// Progress toward the target in `[0.0, 1.0]`; 0 when there is no target
    pub fn progress_fraction(&self) -> f64 {
        self.target
            .and_then(|target| self.current.ratio(target))
            .map(|ratio| ratio.clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    pub fn is_reached(&self) -> bool {
        matches!(self.target, Some(target) if self.current >= target)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "{} ({} / {})", self.name, self.current, target),
            None => write!(f, "{} ({})", self.name, self.current),
        }
    }
}
