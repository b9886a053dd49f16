//! Document operation classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The CRUD operation a lifecycle event belongs to, as reported to hook
/// actions in their execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A new document is being created.
    Create,
    /// An existing document is being updated.
    Update,
    /// A document is being deleted.
    Delete,
}

impl Operation {
    /// Returns the lowercase wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
