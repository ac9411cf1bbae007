//! API Route Module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`tickets`] - ticket catalog and lifecycle
//! - [`hotels`] - hotel catalog (eligibility-gated)
//! - [`bookings`] - room booking create/change/get
//! - [`payments`] - ticket payment processing

pub mod bookings;
pub mod health;
pub mod hotels;
pub mod payments;
pub mod tickets;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
///
/// Every `/api/*` route goes through the auth middleware; `/health`
/// stays public.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tickets::router())
        .merge(hotels::router())
        .merge(bookings::router())
        .merge(payments::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
