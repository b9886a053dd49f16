//! In-memory recording job queue.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use hookqueue_core::result::AppResult;
use hookqueue_core::traits::{JobHandle, JobQueue};

/// A job recorded by [`MemoryJobQueue`].
#[derive(Debug, Clone)]
pub struct QueuedJob {
    /// Handle returned to the submitter.
    pub handle: JobHandle,
    /// Task name the job was queued under.
    pub task: String,
    /// Job input payload.
    pub input: Value,
    /// Submission timestamp.
    pub queued_at: DateTime<Utc>,
}

/// A [`JobQueue`] that records submissions for later inspection.
///
/// Nothing consumes the queue; tests drain it to assert on what the
/// dispatcher submitted.
#[derive(Debug, Default)]
pub struct MemoryJobQueue {
    /// Recorded jobs in submission order.
    jobs: Mutex<Vec<QueuedJob>>,
}

impl MemoryJobQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued jobs.
    pub async fn len(&self) -> usize {
        self.jobs.lock().await.len()
    }

    /// Returns whether the queue is empty.
    pub async fn is_empty(&self) -> bool {
        self.jobs.lock().await.is_empty()
    }

    /// Removes and returns all queued jobs in submission order.
    pub async fn drain(&self) -> Vec<QueuedJob> {
        let mut jobs = self.jobs.lock().await;
        jobs.drain(..).collect()
    }
}

#[async_trait]
impl JobQueue for MemoryJobQueue {
    async fn queue(&self, task: &str, input: Value) -> AppResult<JobHandle> {
        let handle = JobHandle {
            id: Uuid::new_v4(),
            task: task.to_string(),
        };

        tracing::debug!(task = %task, job_id = %handle.id, "Job queued");

        let mut jobs = self.jobs.lock().await;
        jobs.push(QueuedJob {
            handle: handle.clone(),
            task: task.to_string(),
            input,
            queued_at: Utc::now(),
        });

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_submissions_in_order() {
        let queue = MemoryJobQueue::new();
        queue.queue("a", json!({"n": 1})).await.unwrap();
        queue.queue("b", json!({"n": 2})).await.unwrap();

        let jobs = queue.drain().await;
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].task, "a");
        assert_eq!(jobs[1].task, "b");
        assert!(queue.is_empty().await);
    }
}
