//! Hotel and Room Repository

use super::RepoResult;
use shared::models::{Hotel, HotelCreate, HotelWithRooms, Room, RoomCreate};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct HotelRepository {
    pool: SqlitePool,
}

impl HotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_hotels(&self) -> RepoResult<Vec<Hotel>> {
        let hotels = sqlx::query_as::<_, Hotel>("SELECT id, name, image FROM hotel ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    /// One hotel together with all of its rooms
    pub async fn find_hotel_with_rooms(&self, id: i64) -> RepoResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, Hotel>("SELECT id, name, image FROM hotel WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, name, capacity, hotel_id FROM room WHERE hotel_id = ? ORDER BY id",
        )
        .bind(hotel.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            rooms,
        }))
    }

    pub async fn find_room_by_id(&self, id: i64) -> RepoResult<Option<Room>> {
        let room =
            sqlx::query_as::<_, Room>("SELECT id, name, capacity, hotel_id FROM room WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(room)
    }

    /// Insert a hotel (seeding)
    pub async fn create_hotel(&self, data: HotelCreate) -> RepoResult<Hotel> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotel (name, image) VALUES (?, ?) RETURNING id, name, image",
        )
        .bind(&data.name)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(hotel)
    }

    /// Insert a room (seeding)
    pub async fn create_room(&self, data: RoomCreate) -> RepoResult<Room> {
        let room = sqlx::query_as::<_, Room>(
            "INSERT INTO room (name, capacity, hotel_id) VALUES (?, ?, ?) \
             RETURNING id, name, capacity, hotel_id",
        )
        .bind(&data.name)
        .bind(data.capacity)
        .bind(data.hotel_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }
}
