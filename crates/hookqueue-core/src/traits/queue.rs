//! Asynchronous job queue trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::result::AppResult;

/// Handle to a queued job. The dispatcher is fire-and-forget: it never
/// polls or awaits job completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    /// Queued job identifier.
    pub id: Uuid,
    /// The task name the job was queued under.
    pub task: String,
}

/// Submission interface to the host's background job queue.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Queues a job for the named task with the given input.
    async fn queue(&self, task: &str, input: Value) -> AppResult<JobHandle>;
}
