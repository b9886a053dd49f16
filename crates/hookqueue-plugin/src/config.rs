//! Declarative plugin configuration.
//!
//! Three authoring shapes are accepted for a collection's hooks:
//!
//! - a bare string — one `afterChange` task
//! - a list of strings/objects — several `afterChange` tasks, in order
//! - a full per-phase object
//!
//! In addition, flat `"<collection>.<phase>"` pattern keys on the config
//! root map directly to one or more actions; those are captured by the
//! flattened `patterns` map and validated explicitly in [`crate::pattern`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A unit of work to run in response to a lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookAction {
    /// Identifier of a task, workflow, or stored function.
    pub slug: String,
    /// Extra parameters forwarded to the task. When empty, the event
    /// data is spread into the input instead.
    #[serde(default)]
    pub input: Map<String, Value>,
}

impl HookAction {
    /// Creates an action with an empty input mapping.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            input: Map::new(),
        }
    }

    /// Adds an input parameter.
    pub fn with_input(mut self, key: impl Into<String>, value: Value) -> Self {
        self.input.insert(key.into(), value);
        self
    }
}

/// A hook action as authored: either a bare slug or a full action object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionSpec {
    /// Bare slug shorthand.
    Slug(String),
    /// Full action object.
    Action(HookAction),
}

impl ActionSpec {
    /// Coerces this spec into a [`HookAction`].
    pub fn into_action(self) -> HookAction {
        match self {
            Self::Slug(slug) => HookAction::new(slug),
            Self::Action(action) => action,
        }
    }

    /// Returns the slug without coercing.
    pub fn slug(&self) -> &str {
        match self {
            Self::Slug(slug) => slug,
            Self::Action(action) => &action.slug,
        }
    }
}

impl From<&str> for ActionSpec {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl From<HookAction> for ActionSpec {
    fn from(action: HookAction) -> Self {
        Self::Action(action)
    }
}

/// Per-collection hook bindings, one optional action list per phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHookConfig {
    /// Actions fired before a create/update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_change: Option<Vec<ActionSpec>>,
    /// Actions fired after a create/update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_change: Option<Vec<ActionSpec>>,
    /// Actions fired before a delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_delete: Option<Vec<ActionSpec>>,
    /// Actions fired after a delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_delete: Option<Vec<ActionSpec>>,
}

/// A collection's hook configuration in any of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookConfig {
    /// One `afterChange` task by slug.
    Slug(String),
    /// Several `afterChange` tasks, in order.
    List(Vec<ActionSpec>),
    /// Explicit per-phase configuration.
    Detailed(CollectionHookConfig),
}

/// Value of a `"<collection>.<phase>"` pattern key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternValue {
    /// Several actions, in order.
    Many(Vec<ActionSpec>),
    /// A single action.
    One(ActionSpec),
}

impl PatternValue {
    /// Coerces this value into an ordered action list.
    pub fn into_actions(self) -> Vec<ActionSpec> {
        match self {
            Self::Many(specs) => specs,
            Self::One(spec) => vec![spec],
        }
    }
}

/// The declarative configuration supplied once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookQueuePluginConfig {
    /// Hook configuration per collection slug. The `"*"` wildcard entry
    /// applies to any collection without an explicit entry.
    #[serde(default)]
    pub collections: HashMap<String, HookConfig>,
    /// Hooks applied to every collection unless excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<HookConfig>,
    /// Collection slugs opted out of global hooks.
    #[serde(default)]
    pub exclude_from_global: Vec<String>,
    /// Remaining `"<collection>.<phase>"` pattern keys — an alternate,
    /// flatter authoring syntax for the same data.
    #[serde(flatten)]
    pub patterns: HashMap<String, PatternValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hook_config_shapes() {
        let slug: HookConfig = serde_json::from_value(json!("sendConfirmation")).unwrap();
        assert_eq!(slug, HookConfig::Slug("sendConfirmation".to_string()));

        let list: HookConfig =
            serde_json::from_value(json!(["a", {"slug": "b", "input": {"x": 1}}])).unwrap();
        let HookConfig::List(specs) = list else {
            panic!("expected list shape");
        };
        assert_eq!(specs[0].slug(), "a");
        assert_eq!(specs[1].slug(), "b");

        let detailed: HookConfig =
            serde_json::from_value(json!({"beforeDelete": ["cleanup"]})).unwrap();
        let HookConfig::Detailed(config) = detailed else {
            panic!("expected detailed shape");
        };
        assert_eq!(config.before_delete.unwrap()[0].slug(), "cleanup");
        assert!(config.after_change.is_none());
    }

    #[test]
    fn test_pattern_keys_are_captured() {
        let config: HookQueuePluginConfig = serde_json::from_value(json!({
            "collections": {"orders": "sendConfirmation"},
            "excludeFromGlobal": ["audit"],
            "orders.afterChange": "notify",
            "invoices.beforeDelete": ["archive", "audit"],
        }))
        .unwrap();

        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.exclude_from_global, vec!["audit"]);
        assert_eq!(config.patterns.len(), 2);
        assert!(config.patterns.contains_key("orders.afterChange"));
    }

    #[test]
    fn test_action_input_defaults_empty() {
        let action: HookAction = serde_json::from_value(json!({"slug": "x"})).unwrap();
        assert!(action.input.is_empty());
    }
}
