//! Hotel API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Hotel, HotelWithRooms};

/// GET /api/hotels - all hotels (eligibility-gated)
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = state.hotels.list(current_user.id).await?;
    Ok(Json(hotels))
}

/// GET /api/hotels/{hotel_id} - one hotel with its rooms
pub async fn get_with_rooms(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(hotel_id): Path<i64>,
) -> AppResult<Json<HotelWithRooms>> {
    let hotel = state
        .hotels
        .get_with_rooms(current_user.id, hotel_id)
        .await?;
    Ok(Json(hotel))
}
