//! Hotel and Room Models

use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
}

/// Room entity — `capacity` bounds simultaneous bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub hotel_id: i64,
}

/// Hotel joined with all of its rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub rooms: Vec<Room>,
}

/// Create hotel payload (seeding)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreate {
    pub name: String,
    pub image: String,
}

/// Create room payload (seeding)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub name: String,
    pub capacity: i64,
    pub hotel_id: i64,
}
