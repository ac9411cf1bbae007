//! Booking Repository
//!
//! The write paths here enforce the capacity bound inside the statement
//! itself: the insert/update only lands while the target room's booking
//! count is below its capacity, so two racing requests cannot both
//! squeeze into the last slot.

use super::{RepoError, RepoResult};
use shared::models::{Booking, BookingWithRoom, Room};
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The user's booking, joined with the current room snapshot
    pub async fn find_by_user_id(&self, user_id: i64) -> RepoResult<Option<BookingWithRoom>> {
        let row = sqlx::query(
            "SELECT b.id, r.id AS room_id, r.name, r.capacity, r.hotel_id \
             FROM booking b \
             JOIN room r ON r.id = b.room_id \
             WHERE b.user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            Ok(BookingWithRoom {
                id: r.try_get("id").map_err(RepoError::from)?,
                room: Room {
                    id: r.try_get("room_id").map_err(RepoError::from)?,
                    name: r.try_get("name").map_err(RepoError::from)?,
                    capacity: r.try_get("capacity").map_err(RepoError::from)?,
                    hotel_id: r.try_get("hotel_id").map_err(RepoError::from)?,
                },
            })
        })
        .transpose()
    }

    /// Current occupancy of a room
    pub async fn count_by_room_id(&self, room_id: i64) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM booking WHERE room_id = ?")
                .bind(room_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Insert a booking, guarded by the room's capacity.
    ///
    /// Errors:
    /// - [`RepoError::Validation`] when the room is at (or above) capacity
    ///   at commit time — the guard re-evaluates atomically, closing the
    ///   check-then-insert race.
    /// - [`RepoError::Duplicate`] when the user already has a booking
    ///   (UNIQUE on user_id).
    pub async fn create(&self, user_id: i64, room_id: i64) -> RepoResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO booking (user_id, room_id) \
             SELECT ?1, ?2 \
             WHERE (SELECT COUNT(*) FROM booking WHERE room_id = ?2) \
                 < (SELECT capacity FROM room WHERE id = ?2) \
             RETURNING id, user_id, room_id",
        )
        .bind(user_id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;

        booking.ok_or_else(|| RepoError::Validation(format!("room {room_id} is at capacity")))
    }

    /// Move the user's existing booking to another room, same guard as
    /// [`Self::create`]. The row is mutated in place; no new booking is
    /// created.
    pub async fn update_room_by_user_id(&self, user_id: i64, room_id: i64) -> RepoResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE booking SET room_id = ?2, updated_at = CURRENT_TIMESTAMP \
             WHERE user_id = ?1 \
               AND (SELECT COUNT(*) FROM booking WHERE room_id = ?2) \
                   < (SELECT capacity FROM room WHERE id = ?2) \
             RETURNING id, user_id, room_id",
        )
        .bind(user_id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;

        booking.ok_or_else(|| RepoError::Validation(format!("room {room_id} is at capacity")))
    }
}
