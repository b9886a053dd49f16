//! In-memory task runner — dispatches to registered handlers by slug.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use hookqueue_core::error::AppError;
use hookqueue_core::result::AppResult;
use hookqueue_core::traits::TaskRunner;

/// Trait for in-process task handler implementations.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    /// The task slug this handler responds to.
    fn slug(&self) -> &str;

    /// Executes the task with the given input.
    async fn execute(&self, input: Value) -> AppResult<Value>;
}

/// A [`TaskRunner`] backed by a registry of in-process handlers.
#[derive(Default)]
pub struct MemoryTaskRunner {
    /// Registered handlers by task slug.
    handlers: DashMap<String, Arc<dyn TaskHandler>>,
}

impl MemoryTaskRunner {
    /// Creates an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task handler under its slug.
    pub fn register(&self, handler: Arc<dyn TaskHandler>) {
        let slug = handler.slug().to_string();
        tracing::info!(slug = %slug, "Task handler registered");
        self.handlers.insert(slug, handler);
    }

    /// Returns whether a handler is registered for a slug.
    pub fn has_handler(&self, slug: &str) -> bool {
        self.handlers.contains_key(slug)
    }
}

#[async_trait]
impl TaskRunner for MemoryTaskRunner {
    async fn run(&self, slug: &str, input: Value) -> AppResult<Value> {
        let handler = self
            .handlers
            .get(slug)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("No task registered with slug: {slug}")))?;

        handler.execute(input).await
    }
}

impl std::fmt::Debug for MemoryTaskRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTaskRunner")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Echo;

    #[async_trait]
    impl TaskHandler for Echo {
        fn slug(&self) -> &str {
            "echo"
        }

        async fn execute(&self, input: Value) -> AppResult<Value> {
            Ok(input)
        }
    }

    #[tokio::test]
    async fn test_runs_registered_handler() {
        let runner = MemoryTaskRunner::new();
        runner.register(Arc::new(Echo));

        let result = runner.run("echo", json!({"x": 1})).await.unwrap();
        assert_eq!(result, json!({"x": 1}));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let runner = MemoryTaskRunner::new();
        let err = runner.run("missing", json!({})).await.unwrap_err();
        assert_eq!(err.kind, hookqueue_core::error::ErrorKind::NotFound);
    }
}
