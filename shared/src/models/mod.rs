//! Data models
//!
//! Shared between gala-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY). Wire casing is
//! camelCase throughout.

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod ticket;

// Re-exports
pub use booking::*;
pub use enrollment::*;
pub use hotel::*;
pub use payment::*;
pub use ticket::*;
