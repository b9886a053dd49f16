//! The merged hook table — the resolved, effective configuration.
//!
//! Built once at plugin-configuration time and immutable thereafter.
//! Combines `collections` entries and pattern-key entries; for the same
//! collection and phase, pattern-key actions are appended after the
//! `collections`-declared ones, so the structured config keeps priority
//! position.

use std::collections::{HashMap, HashSet};

use hookqueue_core::types::LifecyclePhase;

use crate::config::{ActionSpec, HookAction, HookConfig, HookQueuePluginConfig};
use crate::pattern;

/// Wildcard collection slug applied when no explicit entry exists.
pub const WILDCARD: &str = "*";

/// A collection's normalized hook bindings: one ordered action list per
/// phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseTable {
    /// Actions per phase, declaration order preserved.
    before_change: Vec<HookAction>,
    after_change: Vec<HookAction>,
    before_delete: Vec<HookAction>,
    after_delete: Vec<HookAction>,
}

impl PhaseTable {
    /// Returns the action list for a phase.
    pub fn actions(&self, phase: LifecyclePhase) -> &[HookAction] {
        match phase {
            LifecyclePhase::BeforeChange => &self.before_change,
            LifecyclePhase::AfterChange => &self.after_change,
            LifecyclePhase::BeforeDelete => &self.before_delete,
            LifecyclePhase::AfterDelete => &self.after_delete,
        }
    }

    fn actions_mut(&mut self, phase: LifecyclePhase) -> &mut Vec<HookAction> {
        match phase {
            LifecyclePhase::BeforeChange => &mut self.before_change,
            LifecyclePhase::AfterChange => &mut self.after_change,
            LifecyclePhase::BeforeDelete => &mut self.before_delete,
            LifecyclePhase::AfterDelete => &mut self.after_delete,
        }
    }

    /// Returns whether no phase has any actions.
    pub fn is_empty(&self) -> bool {
        LifecyclePhase::ALL.iter().all(|p| self.actions(*p).is_empty())
    }

    fn append(&mut self, phase: LifecyclePhase, actions: Vec<HookAction>) {
        self.actions_mut(phase).extend(actions);
    }
}

/// The merged, immutable hook table.
#[derive(Debug, Clone, Default)]
pub struct HookTable {
    /// Normalized bindings per collection slug (including `"*"`).
    collections: HashMap<String, PhaseTable>,
    /// Normalized global bindings, applied to every non-excluded
    /// collection.
    global: Option<PhaseTable>,
    /// Collections opted out of global hooks.
    exclude_from_global: HashSet<String>,
}

impl HookTable {
    /// Builds the merged table from a plugin configuration.
    ///
    /// Invalid pattern keys and empty-slug actions are warned about and
    /// dropped; nothing here is fatal.
    pub fn build(config: &HookQueuePluginConfig) -> Self {
        let mut collections: HashMap<String, PhaseTable> = HashMap::new();

        for (slug, hook_config) in &config.collections {
            collections.insert(slug.clone(), normalize_hook_config(hook_config));
        }

        for entry in pattern::parse_entries(config) {
            collections
                .entry(entry.collection)
                .or_default()
                .append(entry.phase, retain_valid(entry.actions));
        }

        let global = config.global.as_ref().map(normalize_hook_config);

        Self {
            collections,
            global,
            exclude_from_global: config.exclude_from_global.iter().cloned().collect(),
        }
    }

    /// Resolves the applicable bindings for a collection: the explicit
    /// entry if present, else the `"*"` wildcard entry, else none.
    pub fn resolve(&self, collection: &str) -> Option<&PhaseTable> {
        self.collections
            .get(collection)
            .or_else(|| self.collections.get(WILDCARD))
    }

    /// Returns the global bindings, if configured.
    pub fn global(&self) -> Option<&PhaseTable> {
        self.global.as_ref()
    }

    /// Returns whether a collection is opted out of global hooks.
    pub fn is_excluded_from_global(&self, collection: &str) -> bool {
        self.exclude_from_global.contains(collection)
    }

    /// Returns whether any hooks (local, wildcard, or global) could
    /// apply to a collection.
    pub fn applies_to(&self, collection: &str) -> bool {
        self.resolve(collection).is_some() || self.global.is_some()
    }
}

/// Normalizes any authoring shape into a full phase table.
///
/// A bare string becomes one `afterChange` action; a list becomes
/// `afterChange` actions in order; a detailed object has its bare string
/// entries coerced per phase.
pub fn normalize_hook_config(config: &HookConfig) -> PhaseTable {
    let mut table = PhaseTable::default();

    match config {
        HookConfig::Slug(slug) => {
            table.append(
                LifecyclePhase::AfterChange,
                retain_valid(vec![HookAction::new(slug.clone())]),
            );
        }
        HookConfig::List(specs) => {
            table.append(LifecyclePhase::AfterChange, normalize_specs(specs));
        }
        HookConfig::Detailed(detailed) => {
            let phases = [
                (LifecyclePhase::BeforeChange, &detailed.before_change),
                (LifecyclePhase::AfterChange, &detailed.after_change),
                (LifecyclePhase::BeforeDelete, &detailed.before_delete),
                (LifecyclePhase::AfterDelete, &detailed.after_delete),
            ];
            for (phase, specs) in phases {
                if let Some(specs) = specs {
                    table.append(phase, normalize_specs(specs));
                }
            }
        }
    }

    table
}

fn normalize_specs(specs: &[ActionSpec]) -> Vec<HookAction> {
    retain_valid(specs.iter().cloned().map(ActionSpec::into_action).collect())
}

/// Drops actions with an empty slug, warning about each.
fn retain_valid(actions: Vec<HookAction>) -> Vec<HookAction> {
    actions
        .into_iter()
        .filter(|action| {
            if action.slug.is_empty() {
                tracing::warn!("Hook action with empty slug, skipping");
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> HookQueuePluginConfig {
        serde_json::from_value(value).unwrap()
    }

    fn slugs(table: &PhaseTable, phase: LifecyclePhase) -> Vec<&str> {
        table
            .actions(phase)
            .iter()
            .map(|a| a.slug.as_str())
            .collect()
    }

    #[test]
    fn test_string_config_normalizes_to_after_change() {
        let table = HookTable::build(&config(json!({
            "collections": {"orders": "sendConfirmation"},
        })));

        let orders = table.resolve("orders").unwrap();
        assert_eq!(slugs(orders, LifecyclePhase::AfterChange), ["sendConfirmation"]);
        assert!(orders.actions(LifecyclePhase::BeforeChange).is_empty());
        assert_eq!(
            orders.actions(LifecyclePhase::AfterChange)[0],
            HookAction::new("sendConfirmation")
        );
    }

    #[test]
    fn test_pattern_actions_append_after_declared() {
        let table = HookTable::build(&config(json!({
            "collections": {"orders": {"afterChange": ["a", "b"]}},
            "orders.afterChange": "c",
        })));

        let orders = table.resolve("orders").unwrap();
        assert_eq!(slugs(orders, LifecyclePhase::AfterChange), ["a", "b", "c"]);
    }

    #[test]
    fn test_pattern_only_collection() {
        let table = HookTable::build(&config(json!({
            "invoices.beforeDelete": ["archive", {"slug": "audit", "input": {"level": 2}}],
        })));

        let invoices = table.resolve("invoices").unwrap();
        assert_eq!(
            slugs(invoices, LifecyclePhase::BeforeDelete),
            ["archive", "audit"]
        );
        assert_eq!(
            invoices.actions(LifecyclePhase::BeforeDelete)[1].input["level"],
            json!(2)
        );
    }

    #[test]
    fn test_invalid_pattern_phase_is_excluded() {
        let table = HookTable::build(&config(json!({
            "orders.afterRead": "shouldNotAppear",
        })));

        assert!(table.resolve("orders").is_none());
    }

    #[test]
    fn test_wildcard_fallback() {
        let table = HookTable::build(&config(json!({
            "collections": {
                "orders": "orderTask",
                "*": "anyTask",
            },
        })));

        assert_eq!(
            slugs(table.resolve("orders").unwrap(), LifecyclePhase::AfterChange),
            ["orderTask"]
        );
        assert_eq!(
            slugs(table.resolve("posts").unwrap(), LifecyclePhase::AfterChange),
            ["anyTask"]
        );
    }

    #[test]
    fn test_no_entry_and_no_wildcard() {
        let table = HookTable::build(&config(json!({
            "collections": {"orders": "x"},
        })));

        assert!(table.resolve("posts").is_none());
        assert!(!table.applies_to("posts"));
    }

    #[test]
    fn test_global_and_exclusion() {
        let table = HookTable::build(&config(json!({
            "global": "auditLog",
            "excludeFromGlobal": ["orders"],
        })));

        assert_eq!(
            slugs(table.global().unwrap(), LifecyclePhase::AfterChange),
            ["auditLog"]
        );
        assert!(table.is_excluded_from_global("orders"));
        assert!(!table.is_excluded_from_global("invoices"));
        // Global alone still makes the plugin apply to any collection.
        assert!(table.applies_to("orders"));
    }

    #[test]
    fn test_empty_slug_actions_dropped() {
        let table = HookTable::build(&config(json!({
            "collections": {"orders": ["", "keep"]},
        })));

        assert_eq!(
            slugs(table.resolve("orders").unwrap(), LifecyclePhase::AfterChange),
            ["keep"]
        );
    }
}
