//! Service layer containing the actual work behind each command.
//!
//! ## Service map
//! - `depth.rs` — maximum depth of a directory tree.
//! - `output.rs` — trace line, usage block and prefixed listings.
//!
//! ## Conventions
//! - Output helpers take the sink explicitly instead of printing.
//! - Keep command handlers thin; delegate to services.

pub mod depth;
pub mod output;
