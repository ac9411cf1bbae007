//! Authentication
//!
//! JWT validation and the request-scoped [`CurrentUser`] context.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
