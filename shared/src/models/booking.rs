//! Booking Model

use serde::{Deserialize, Serialize};

use crate::models::Room;

/// Booking entity — at most one active booking per user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
}

/// Booking joined with the current room snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRoom {
    pub id: i64,
    pub room: Room,
}

/// Booking id envelope returned by create/change operations
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingId {
    pub booking_id: i64,
}
