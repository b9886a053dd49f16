//! Task/workflow runner trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;

/// External executor capable of running a named task or workflow.
///
/// This is the primary target of hook dispatch; a failed invocation
/// triggers the function-lookup fallback.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    /// Runs the task or workflow identified by `slug` with the given
    /// input, returning its result value.
    async fn run(&self, slug: &str, input: Value) -> AppResult<Value>;
}
