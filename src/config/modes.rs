//! Download policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when one image fails to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the run on the first failure (default).
    #[default]
    FailFast,
    /// Record the failure and carry on with the remaining images.
    Continue,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => write!(f, "fail-fast"),
            FailurePolicy::Continue => write!(f, "continue"),
        }
    }
}

/// How to name images whose timestamps collide at second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later images sharing a second get `_1`, `_2`, ... (default).
    #[default]
    Suffix,
    /// Only the first image of a second is saved; the rest are skipped.
    Skip,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Suffix => write!(f, "suffix"),
            CollisionPolicy::Skip => write!(f, "skip"),
        }
    }
}
