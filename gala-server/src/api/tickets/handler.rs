//! Ticket API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{TicketType, TicketWithType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    /// Absent id is a business-rule failure, not a schema failure
    pub ticket_type_id: Option<i64>,
}

/// GET /api/tickets/types - ticket type catalog
pub async fn list_types(State(state): State<ServerState>) -> AppResult<Json<Vec<TicketType>>> {
    let types = state.tickets.get_types().await?;
    Ok(Json(types))
}

/// POST /api/tickets - reserve a ticket for the current user
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<CreateTicketRequest>,
) -> AppResult<Json<TicketWithType>> {
    let ticket = state
        .tickets
        .create(current_user.id, payload.ticket_type_id)
        .await?;
    Ok(Json(ticket))
}

/// GET /api/tickets - the current user's ticket
pub async fn get_by_user(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<TicketWithType>> {
    let ticket = state.tickets.get_by_user(current_user.id).await?;
    Ok(Json(ticket))
}
