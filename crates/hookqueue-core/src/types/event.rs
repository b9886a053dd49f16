//! Lifecycle events and the context handed to hook actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::operation::Operation;
use super::phase::LifecyclePhase;

/// A document lifecycle event as observed by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Slug of the collection the document belongs to.
    pub collection: String,
    /// The phase this event fires at.
    pub phase: LifecyclePhase,
    /// The document data for this event (the incoming data for
    /// `beforeChange`, the persisted document for `afterChange`, the
    /// document id for delete phases).
    pub data: Value,
    /// The previous version of the document, when one exists.
    pub original_doc: Option<Value>,
    /// Timestamp of the event.
    pub occurred_at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Creates a new event with no original document.
    pub fn new(collection: impl Into<String>, phase: LifecyclePhase, data: Value) -> Self {
        Self {
            collection: collection.into(),
            phase,
            data,
            original_doc: None,
            occurred_at: Utc::now(),
        }
    }

    /// Sets the previous document version.
    pub fn with_original(mut self, original_doc: Value) -> Self {
        self.original_doc = Some(original_doc);
        self
    }

    /// Classifies the operation for this event.
    ///
    /// Change phases report `update` when a previous document is present
    /// and `create` otherwise; delete phases always report `delete`.
    pub fn operation(&self) -> Operation {
        if self.phase.is_delete() {
            Operation::Delete
        } else if self.original_doc.is_some() {
            Operation::Update
        } else {
            Operation::Create
        }
    }

    /// Builds the execution context attached to every hook action input.
    pub fn context(&self) -> EventContext {
        EventContext {
            collection: self.collection.clone(),
            operation: self.operation(),
            data: self.data.clone(),
            original_doc: self.original_doc.clone(),
        }
    }
}

/// Context serialized into hook action input under the `"context"` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    /// Collection the event fired on.
    pub collection: String,
    /// The classified operation.
    pub operation: Operation,
    /// The event document data.
    pub data: Value,
    /// The previous document version, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_doc: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_classification() {
        let create = LifecycleEvent::new("orders", LifecyclePhase::AfterChange, json!({"id": 1}));
        assert_eq!(create.operation(), Operation::Create);

        let update = LifecycleEvent::new("orders", LifecyclePhase::BeforeChange, json!({"id": 1}))
            .with_original(json!({"id": 1, "status": "old"}));
        assert_eq!(update.operation(), Operation::Update);

        // Delete phases report delete regardless of original document.
        let delete = LifecycleEvent::new("orders", LifecyclePhase::AfterDelete, json!({"id": 1}))
            .with_original(json!({"id": 1}));
        assert_eq!(delete.operation(), Operation::Delete);
    }

    #[test]
    fn test_context_shape() {
        let event = LifecycleEvent::new("orders", LifecyclePhase::AfterChange, json!({"id": 1}));
        let context = serde_json::to_value(event.context()).unwrap();
        assert_eq!(context["collection"], "orders");
        assert_eq!(context["operation"], "create");
        assert_eq!(context["data"], json!({"id": 1}));
        assert!(context.get("originalDoc").is_none());
    }
}
