//! Hook dispatch configuration.

use serde::{Deserialize, Serialize};

/// Settings governing the task/function fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Slug of the task submitted to the job queue when a hook action
    /// resolves to a stored function record instead of a task.
    #[serde(default = "default_function_task_slug")]
    pub function_task_slug: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            function_task_slug: default_function_task_slug(),
        }
    }
}

fn default_function_task_slug() -> String {
    "executeFunction".to_string()
}
