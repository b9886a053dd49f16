//! Shared domain types: lifecycle phases, operations, events, and the
//! host-framework collection model.

pub mod collection;
pub mod event;
pub mod operation;
pub mod phase;

pub use collection::{CollectionConfig, FrameworkConfig, LifecycleHandler, LifecycleHooks};
pub use event::{EventContext, LifecycleEvent};
pub use operation::Operation;
pub use phase::LifecyclePhase;
