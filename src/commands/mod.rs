//! Command handler layer.
//!
//! ## Files
//! - `registry.rs` — name → handler table and the dispatcher.
//! - `builtin.rs` — the commands exposed on the CLI (`list`, `getMaxDepth`).
//!
//! ## Principles
//! - Only what is in the table is callable.
//! - Delegate the real work to `services/*`.
//! - Keep output text stable; scripts grep it.

pub mod builtin;
pub mod registry;

pub use registry::{dispatch, register_commands};
