//! Gala Server - conference/event registration backend
//!
//! # Architecture
//!
//! Users enroll, reserve a ticket, pay for it and — once eligible —
//! book a hotel room. The service layer enforces the eligibility and
//! capacity rules; everything else is thin plumbing around it.
//!
//! # Module structure
//!
//! ```text
//! gala-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT validation middleware
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # ticket / eligibility / booking / payment rules
//! ├── db/            # pool bootstrap and repositories
//! └── utils/         # error types, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
