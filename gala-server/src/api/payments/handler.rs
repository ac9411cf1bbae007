//! Payment API Handlers

use axum::{
    Json,
    extract::{Extension, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CardData, Payment};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub ticket_id: Option<i64>,
    pub card_data: Option<CardData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    pub ticket_id: Option<i64>,
}

/// POST /api/payments/process - pay for a ticket
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<Payment>> {
    let payment = state
        .payments
        .create(current_user.id, payload.ticket_id, payload.card_data)
        .await?;
    Ok(Json(payment))
}

/// GET /api/payments?ticketId=N - payment for a ticket
pub async fn get_by_ticket_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<PaymentQuery>,
) -> AppResult<Json<Payment>> {
    let payment = state
        .payments
        .get_by_ticket_id(current_user.id, query.ticket_id)
        .await?;
    Ok(Json(payment))
}
