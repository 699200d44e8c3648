//! Shared data model layer.
//!
//! ## Files
//! - `models.rs` — command table rows, handler signature, dispatch outcome.
//!
//! ## Rule of thumb
//! Types here carry no filesystem side effects of their own.

pub mod models;
