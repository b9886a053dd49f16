//! Framework-config transformation entry point.
//!
//! The plugin is consumed as a function over the host's configuration:
//! it builds the merged hook table once, then appends one dispatch
//! handler to each lifecycle phase of every collection the table applies
//! to. Handlers already present in the incoming configuration are kept
//! and run first.

use std::sync::Arc;

use async_trait::async_trait;

use hookqueue_core::config::dispatch::DispatchConfig;
use hookqueue_core::result::AppResult;
use hookqueue_core::types::{FrameworkConfig, LifecycleEvent, LifecycleHandler, LifecyclePhase};

use crate::config::HookQueuePluginConfig;
use crate::dispatcher::{HookDispatcher, HookRuntime};
use crate::table::HookTable;

/// The handler appended to collection hook lists.
///
/// Always returns `Ok(())`: dispatch absorbs every failure, so the
/// host's create/update/delete can never be failed by this handler.
struct QueueHook {
    dispatcher: Arc<HookDispatcher>,
}

#[async_trait]
impl LifecycleHandler for QueueHook {
    async fn run(&self, event: &LifecycleEvent) -> AppResult<()> {
        self.dispatcher.dispatch(event).await;
        Ok(())
    }
}

/// Applies the plugin to an incoming framework configuration.
///
/// Collections the merged table cannot apply to (no explicit entry, no
/// wildcard, no global hooks) are returned untouched.
pub fn apply(
    mut incoming: FrameworkConfig,
    config: &HookQueuePluginConfig,
    runtime: Arc<HookRuntime>,
    dispatch: DispatchConfig,
) -> FrameworkConfig {
    let table = Arc::new(HookTable::build(config));
    let dispatcher = Arc::new(HookDispatcher::new(table.clone(), runtime, dispatch));

    for collection in &mut incoming.collections {
        if !table.applies_to(&collection.slug) {
            continue;
        }

        for phase in LifecyclePhase::ALL {
            collection.hooks.push(
                phase,
                Arc::new(QueueHook {
                    dispatcher: dispatcher.clone(),
                }),
            );
        }

        tracing::debug!(collection = %collection.slug, "Queue hooks installed");
    }

    incoming
}

/// Creates the plugin as a configuration-transformation closure, the
/// shape hosts compose with other plugins.
pub fn hooks_queue_plugin(
    config: HookQueuePluginConfig,
    runtime: Arc<HookRuntime>,
    dispatch: DispatchConfig,
) -> impl FnOnce(FrameworkConfig) -> FrameworkConfig {
    move |incoming| apply(incoming, &config, runtime, dispatch)
}
