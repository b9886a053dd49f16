//! Host-framework collection model.
//!
//! The hosting CMS hands the plugin its full configuration — an array of
//! collection definitions, each carrying four lifecycle hook handler
//! lists. The plugin returns a modified configuration with one additional
//! handler appended per phase; existing handlers are preserved and run
//! first.

use std::sync::Arc;

use async_trait::async_trait;

use super::event::LifecycleEvent;
use super::phase::LifecyclePhase;
use crate::result::AppResult;

/// Trait implemented by lifecycle hook handlers attached to collections.
#[async_trait]
pub trait LifecycleHandler: Send + Sync {
    /// Handles a lifecycle event for the collection this handler is
    /// attached to.
    async fn run(&self, event: &LifecycleEvent) -> AppResult<()>;
}

/// The four per-phase handler lists of a collection.
///
/// Handlers within a list run in registration order from the host's
/// perspective; the plugin only ever appends.
#[derive(Clone, Default)]
pub struct LifecycleHooks {
    /// Handlers fired before a create/update is persisted.
    pub before_change: Vec<Arc<dyn LifecycleHandler>>,
    /// Handlers fired after a create/update is persisted.
    pub after_change: Vec<Arc<dyn LifecycleHandler>>,
    /// Handlers fired before a delete.
    pub before_delete: Vec<Arc<dyn LifecycleHandler>>,
    /// Handlers fired after a delete.
    pub after_delete: Vec<Arc<dyn LifecycleHandler>>,
}

impl LifecycleHooks {
    /// Returns the handler list for a phase.
    pub fn get(&self, phase: LifecyclePhase) -> &[Arc<dyn LifecycleHandler>] {
        match phase {
            LifecyclePhase::BeforeChange => &self.before_change,
            LifecyclePhase::AfterChange => &self.after_change,
            LifecyclePhase::BeforeDelete => &self.before_delete,
            LifecyclePhase::AfterDelete => &self.after_delete,
        }
    }

    /// Appends a handler to a phase's list.
    pub fn push(&mut self, phase: LifecyclePhase, handler: Arc<dyn LifecycleHandler>) {
        match phase {
            LifecyclePhase::BeforeChange => self.before_change.push(handler),
            LifecyclePhase::AfterChange => self.after_change.push(handler),
            LifecyclePhase::BeforeDelete => self.before_delete.push(handler),
            LifecyclePhase::AfterDelete => self.after_delete.push(handler),
        }
    }
}

impl std::fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("before_change", &self.before_change.len())
            .field("after_change", &self.after_change.len())
            .field("before_delete", &self.before_delete.len())
            .field("after_delete", &self.after_delete.len())
            .finish()
    }
}

/// A collection definition as supplied by the hosting framework.
#[derive(Debug, Clone, Default)]
pub struct CollectionConfig {
    /// Stable collection slug.
    pub slug: String,
    /// Lifecycle hook handler lists.
    pub hooks: LifecycleHooks,
}

impl CollectionConfig {
    /// Creates a collection definition with no handlers.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            hooks: LifecycleHooks::default(),
        }
    }
}

/// The hosting framework's configuration, as far as this plugin sees it.
#[derive(Debug, Clone, Default)]
pub struct FrameworkConfig {
    /// All collection definitions.
    pub collections: Vec<CollectionConfig>,
}

impl FrameworkConfig {
    /// Convenience for firing a lifecycle event the way the host would:
    /// runs every handler registered for the event's collection and phase,
    /// in order, propagating the first handler error.
    pub async fn fire(&self, event: &LifecycleEvent) -> AppResult<()> {
        if let Some(collection) = self
            .collections
            .iter()
            .find(|c| c.slug == event.collection)
        {
            for handler in collection.hooks.get(event.phase) {
                handler.run(event).await?;
            }
        }
        Ok(())
    }
}
