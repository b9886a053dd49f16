//! # hookqueue-plugin
//!
//! Bridges collection lifecycle hooks to a task/workflow queue. Provides:
//!
//! - Declarative hook configuration (per-collection, global, wildcard,
//!   and flat `"<collection>.<phase>"` pattern keys)
//! - One-time normalization and merge into an immutable hook table
//! - Best-effort dispatch with a task runner → stored function → job
//!   queue fallback chain; hook failures never reach the write path
//! - The framework-config transformation that installs the dispatch
//!   handlers onto collections
//! - An event-filter utility for `Noun.Verb` subscription patterns

pub mod config;
pub mod dispatcher;
pub mod filter;
pub mod pattern;
pub mod plugin;
pub mod table;

pub use config::{ActionSpec, CollectionHookConfig, HookAction, HookConfig, HookQueuePluginConfig};
pub use dispatcher::{HookDispatcher, HookRuntime};
pub use plugin::hooks_queue_plugin;
pub use table::HookTable;
