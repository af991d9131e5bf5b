//! Generation targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A generation target. Each target is produced by exactly one scope factory.
///
/// The declaration order is the order in which targets run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Partial-update DTOs
    PartialUpdate,
    /// Async data load models (`…Model` / `…NestedCsv`)
    AsyncLoadModel,
    /// Async data load filter strategies
    FilterStrategy,
    /// Java enums for database enum types
    Enum,
}

impl Target {
    /// All targets in run order.
    pub const ALL: [Target; 4] = [
        Target::PartialUpdate,
        Target::AsyncLoadModel,
        Target::FilterStrategy,
        Target::Enum,
    ];

    /// All targets in run order, as a vector.
    pub fn all() -> Vec<Target> {
        Self::ALL.to_vec()
    }

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::PartialUpdate => "partial-update",
            Target::AsyncLoadModel => "async-load-model",
            Target::FilterStrategy => "filter-strategy",
            Target::Enum => "enum",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                let expected: Vec<_> = Self::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "unknown target '{}', expected one of: {}",
                    s,
                    expected.join(", ")
                )
            })
    }
}
