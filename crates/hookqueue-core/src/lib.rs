//! # hookqueue-core
//!
//! Core crate for HookQueue. Contains the lifecycle event model, the
//! host-framework collection types, configuration schemas, the opaque
//! collaborator traits (task runner, function lookup, job queue), and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other HookQueue crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
