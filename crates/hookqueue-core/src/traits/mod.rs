//! Opaque collaborator traits supplied by the host runtime.
//!
//! The dispatcher treats all three as already-synchronized external
//! capabilities: it never retries, times out, or inspects them beyond
//! their return values.

pub mod functions;
pub mod queue;
pub mod runner;

pub use functions::{FunctionLookup, FunctionRecord};
pub use queue::{JobHandle, JobQueue};
pub use runner::TaskRunner;
