//! Shared types for the Gala registration backend
//!
//! Data models exchanged between the server and API consumers.
//! DB row derives are gated behind the `db` feature so clients can
//! depend on this crate without pulling in sqlx.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
