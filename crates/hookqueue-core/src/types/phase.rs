//! Document lifecycle phases at which hooks fire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The four points in a document mutation at which hook dispatch occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecyclePhase {
    /// Fired before a document create or update is persisted.
    BeforeChange,
    /// Fired after a document create or update is persisted.
    AfterChange,
    /// Fired before a document is deleted.
    BeforeDelete,
    /// Fired after a document is deleted.
    AfterDelete,
}

impl LifecyclePhase {
    /// All phases, in declaration order.
    pub const ALL: [LifecyclePhase; 4] = [
        Self::BeforeChange,
        Self::AfterChange,
        Self::BeforeDelete,
        Self::AfterDelete,
    ];

    /// Returns the wire name of this phase as it appears in configuration
    /// keys (`"beforeChange"`, `"afterChange"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeChange => "beforeChange",
            Self::AfterChange => "afterChange",
            Self::BeforeDelete => "beforeDelete",
            Self::AfterDelete => "afterDelete",
        }
    }

    /// Returns whether this phase belongs to a delete operation.
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::BeforeDelete | Self::AfterDelete)
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LifecyclePhase {
    type Err = AppError;

    /// Parses a phase wire name. Anything outside the four recognized
    /// names is rejected, never guessed or defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beforeChange" => Ok(Self::BeforeChange),
            "afterChange" => Ok(Self::AfterChange),
            "beforeDelete" => Ok(Self::BeforeDelete),
            "afterDelete" => Ok(Self::AfterDelete),
            other => Err(AppError::validation(format!(
                "Unrecognized lifecycle phase: {other}"
            ))),
        }
    }
}
