//! `"<collection>.<phase>"` pattern-key parsing.
//!
//! Keys are validated explicitly: exactly one dot, both segments
//! non-empty, and the phase segment must be one of the four recognized
//! lifecycle phases. Anything else is warned about and excluded — never
//! guessed or defaulted.

use hookqueue_core::types::LifecyclePhase;

use crate::config::{HookAction, HookQueuePluginConfig};

/// A parsed pattern-key entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternEntry {
    /// Collection slug (may be the `"*"` wildcard).
    pub collection: String,
    /// Target lifecycle phase.
    pub phase: LifecyclePhase,
    /// Actions to append for that collection and phase, in key order.
    pub actions: Vec<HookAction>,
}

/// Parses one pattern key into its collection and phase segments.
///
/// Returns `None` for malformed keys (zero dots, multiple dots, empty
/// segments, or an unrecognized phase name).
pub fn parse_key(key: &str) -> Option<(String, LifecyclePhase)> {
    let (collection, phase) = key.split_once('.')?;
    if collection.is_empty() || phase.is_empty() || phase.contains('.') {
        return None;
    }

    let phase = phase.parse::<LifecyclePhase>().ok()?;
    Some((collection.to_string(), phase))
}

/// Extracts all valid pattern entries from a plugin configuration,
/// warning about and skipping invalid keys.
pub fn parse_entries(config: &HookQueuePluginConfig) -> Vec<PatternEntry> {
    let mut entries = Vec::new();

    for (key, value) in &config.patterns {
        let Some((collection, phase)) = parse_key(key) else {
            tracing::warn!(key = %key, "Invalid hook pattern key, skipping");
            continue;
        };

        let actions = value
            .clone()
            .into_actions()
            .into_iter()
            .map(|spec| spec.into_action())
            .collect();

        entries.push(PatternEntry {
            collection,
            phase,
            actions,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_keys() {
        assert_eq!(
            parse_key("orders.afterChange"),
            Some(("orders".to_string(), LifecyclePhase::AfterChange))
        );
        assert_eq!(
            parse_key("*.beforeDelete"),
            Some(("*".to_string(), LifecyclePhase::BeforeDelete))
        );
    }

    #[test]
    fn test_rejects_unrecognized_phase() {
        assert_eq!(parse_key("orders.afterRead"), None);
        assert_eq!(parse_key("orders.AfterChange"), None);
    }

    #[test]
    fn test_rejects_malformed_keys() {
        assert_eq!(parse_key("orders"), None);
        assert_eq!(parse_key("orders."), None);
        assert_eq!(parse_key(".afterChange"), None);
        assert_eq!(parse_key("a.b.afterChange"), None);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let config: HookQueuePluginConfig = serde_json::from_value(serde_json::json!({
            "orders.afterChange": "notify",
            "orders.afterRead": "shouldNotAppear",
        }))
        .unwrap();

        let entries = parse_entries(&config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].collection, "orders");
        assert_eq!(entries[0].phase, LifecyclePhase::AfterChange);
        assert_eq!(entries[0].actions[0].slug, "notify");
    }
}
