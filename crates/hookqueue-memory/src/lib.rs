//! # hookqueue-memory
//!
//! In-memory implementations of the three HookQueue collaborator traits:
//!
//! - [`MemoryTaskRunner`] — a handler registry keyed by task slug
//! - [`MemoryFunctionStore`] — a name-keyed stored-function registry
//! - [`MemoryJobQueue`] — a recording queue that hands out job handles
//!
//! These back the integration tests and serve as reference collaborators
//! for hosts that run everything in-process.

pub mod functions;
pub mod queue;
pub mod runner;

pub use functions::MemoryFunctionStore;
pub use queue::{MemoryJobQueue, QueuedJob};
pub use runner::{MemoryTaskRunner, TaskHandler};
