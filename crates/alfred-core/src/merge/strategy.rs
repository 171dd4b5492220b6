//! Merge strategies and conflict policies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How two values at the same key are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Concatenate arrays, left first
    #[default]
    Append,
    /// Concatenate arrays, right first
    Prepend,
    /// Right-hand value wins outright
    Replace,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Prepend => write!(f, "prepend"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            "replace" => Ok(Self::Replace),
            other => Err(format!("unknown merge strategy '{}'", other)),
        }
    }
}

/// What a unique merge does when two entries share an identity but differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Fail with a merge conflict error
    #[default]
    Reject,
    /// Keep the entry seen first
    FirstWins,
    /// Keep the entry seen last, at the position of the first
    LastWins,
}
