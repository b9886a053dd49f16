//! Hook dispatcher — fires configured actions for a lifecycle event.
//!
//! Dispatch is strictly best-effort: every action owns its own error
//! handling, failures are logged and discarded, and nothing ever escapes
//! into the host's document write path. Actions within one list (local
//! or global) run concurrently with no completion-order guarantee; the
//! dispatch call awaits them all before returning.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use hookqueue_core::config::dispatch::DispatchConfig;
use hookqueue_core::result::AppResult;
use hookqueue_core::traits::{FunctionLookup, JobQueue, TaskRunner};
use hookqueue_core::types::LifecycleEvent;

use crate::config::HookAction;
use crate::table::HookTable;

/// The opaque collaborators supplied by the host runtime.
#[derive(Clone)]
pub struct HookRuntime {
    /// Primary task/workflow runner.
    pub tasks: Arc<dyn TaskRunner>,
    /// Stored-function registry lookup.
    pub functions: Arc<dyn FunctionLookup>,
    /// Background job queue.
    pub jobs: Arc<dyn JobQueue>,
}

impl std::fmt::Debug for HookRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRuntime").finish_non_exhaustive()
    }
}

/// Dispatches lifecycle events against the merged hook table.
#[derive(Debug, Clone)]
pub struct HookDispatcher {
    /// The immutable merged table.
    table: Arc<HookTable>,
    /// External collaborators.
    runtime: Arc<HookRuntime>,
    /// Fallback-chain settings.
    config: DispatchConfig,
}

impl HookDispatcher {
    /// Creates a new dispatcher over a built table.
    pub fn new(table: Arc<HookTable>, runtime: Arc<HookRuntime>, config: DispatchConfig) -> Self {
        Self {
            table,
            runtime,
            config,
        }
    }

    /// Returns the merged table this dispatcher reads from.
    pub fn table(&self) -> &Arc<HookTable> {
        &self.table
    }

    /// Dispatches all applicable actions for an event.
    ///
    /// The local list (explicit or wildcard entry) and the global list
    /// are scheduled independently; exclusion suppresses only the global
    /// list. This never returns an error — the host's write operation
    /// must not be blocked or rejected by hook failures.
    pub async fn dispatch(&self, event: &LifecycleEvent) {
        if let Some(local) = self.table.resolve(&event.collection) {
            self.run_actions(local.actions(event.phase), event).await;
        }

        if !self.table.is_excluded_from_global(&event.collection) {
            if let Some(global) = self.table.global() {
                self.run_actions(global.actions(event.phase), event).await;
            }
        }
    }

    /// Runs one action list concurrently and awaits all of it.
    async fn run_actions(&self, actions: &[HookAction], event: &LifecycleEvent) {
        if actions.is_empty() {
            return;
        }

        debug!(
            collection = %event.collection,
            phase = %event.phase,
            action_count = actions.len(),
            "Dispatching hook actions"
        );

        join_all(actions.iter().map(|action| self.run_action(action, event))).await;
    }

    /// Runs a single action, absorbing any failure.
    async fn run_action(&self, action: &HookAction, event: &LifecycleEvent) {
        if let Err(err) = self.try_action(action, event).await {
            error!(
                slug = %action.slug,
                collection = %event.collection,
                phase = %event.phase,
                error = %err,
                "Hook action failed"
            );
        }
    }

    /// The fallback chain for one action: task runner, then stored
    /// function rerouted to the job queue.
    async fn try_action(&self, action: &HookAction, event: &LifecycleEvent) -> AppResult<()> {
        let input = build_input(action, event)?;

        let task_err = match self.runtime.tasks.run(&action.slug, input.clone()).await {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };

        match self.runtime.functions.find_by_name(&action.slug).await? {
            Some(record) => {
                debug!(
                    slug = %action.slug,
                    function_id = %record.id,
                    "Task runner rejected slug, queueing stored function"
                );
                self.runtime
                    .jobs
                    .queue(
                        &self.config.function_task_slug,
                        json!({
                            "functionName": record.name,
                            "args": input,
                        }),
                    )
                    .await?;
                Ok(())
            }
            None => {
                warn!(slug = %action.slug, "No task or function found with name");
                Err(task_err)
            }
        }
    }
}

/// Builds the input for one action invocation: the action's own input,
/// with the event data spread in when that input is empty, plus the
/// event context under `"context"`.
fn build_input(action: &HookAction, event: &LifecycleEvent) -> AppResult<Value> {
    let mut input = action.input.clone();

    if action.input.is_empty() {
        if let Value::Object(data) = &event.data {
            for (key, value) in data {
                input.insert(key.clone(), value.clone());
            }
        }
    }

    input.insert("context".to_string(), serde_json::to_value(event.context())?);
    Ok(Value::Object(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookqueue_core::types::LifecyclePhase;
    use serde_json::json;

    #[test]
    fn test_build_input_spreads_data_when_input_empty() {
        let action = HookAction::new("x");
        let event = LifecycleEvent::new("orders", LifecyclePhase::AfterChange, json!({"id": 1}));

        let input = build_input(&action, &event).unwrap();
        assert_eq!(input["id"], json!(1));
        assert_eq!(input["context"]["collection"], "orders");
        assert_eq!(input["context"]["operation"], "create");
    }

    #[test]
    fn test_build_input_keeps_explicit_input() {
        let action = HookAction::new("x").with_input("channel", json!("email"));
        let event = LifecycleEvent::new("orders", LifecyclePhase::AfterChange, json!({"id": 1}));

        let input = build_input(&action, &event).unwrap();
        assert_eq!(input["channel"], json!("email"));
        // Event data is not spread in when the action has its own input.
        assert!(input.get("id").is_none());
        assert_eq!(input["context"]["data"], json!({"id": 1}));
    }
}
