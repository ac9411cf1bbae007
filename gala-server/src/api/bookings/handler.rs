//! Booking API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{BookingId, BookingWithRoom};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(range(min = 1))]
    pub room_id: i64,
}

/// GET /api/bookings - the current user's booking
pub async fn get_by_user(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<BookingWithRoom>> {
    let booking = state.bookings.get_by_user(current_user.id).await?;
    Ok(Json(booking))
}

/// POST /api/bookings - book a room
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingId>> {
    payload.validate()?;

    let booking = state
        .bookings
        .create(current_user.id, payload.room_id)
        .await?;
    Ok(Json(booking))
}

/// PUT /api/bookings/{booking_id} - move the booking to another room
///
/// The booking is addressed through the authenticated user; the path id
/// is only shape-checked, matching the reference API.
pub async fn change_room(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(booking_id): Path<i64>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingId>> {
    if booking_id < 1 {
        return Err(AppError::Validation("bookingId must be >= 1".into()));
    }
    payload.validate()?;

    let booking = state
        .bookings
        .change_room(current_user.id, payload.room_id)
        .await?;
    Ok(Json(booking))
}
