//! Stored-function registry lookup trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::AppResult;

/// A stored function record, resolvable by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Unique function name, matched against hook action slugs.
    pub name: String,
}

/// Lookup into the host's stored-function collection.
///
/// Queried when the task runner rejects a slug; a hit reroutes the
/// action to the job queue instead.
#[async_trait]
pub trait FunctionLookup: Send + Sync {
    /// Finds a function record whose name equals `name`.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<FunctionRecord>>;
}
