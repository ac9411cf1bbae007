//! Room Capacity Allocator
//!
//! Creates and moves a user's room booking. One booking per user; a
//! room never holds more bookings than its capacity. Check order on
//! create is deliberate: eligibility before room existence before
//! capacity, so an ineligible user learns nothing about the room.

use shared::models::{BookingId, BookingWithRoom};

use crate::db::repository::{BookingRepository, HotelRepository, RepoError};
use crate::services::EligibilityService;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct BookingService {
    eligibility: EligibilityService,
    hotels: HotelRepository,
    bookings: BookingRepository,
}

impl BookingService {
    pub fn new(
        eligibility: EligibilityService,
        hotels: HotelRepository,
        bookings: BookingRepository,
    ) -> Self {
        Self {
            eligibility,
            hotels,
            bookings,
        }
    }

    /// The user's booking with the current room snapshot
    pub async fn get_by_user(&self, user_id: i64) -> AppResult<BookingWithRoom> {
        self.bookings
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }

    pub async fn create(&self, user_id: i64, room_id: i64) -> AppResult<BookingId> {
        self.eligibility
            .require_paid_accommodation_eligible(user_id)
            .await?;

        let room = self
            .hotels
            .find_room_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".into()))?;

        let occupancy = self.bookings.count_by_room_id(room.id).await?;
        if occupancy >= room.capacity {
            return Err(AppError::RoomNotAvailable);
        }

        // The insert re-checks capacity atomically; losing a race maps
        // to the same errors as the serialized path.
        let booking = self
            .bookings
            .create(user_id, room.id)
            .await
            .map_err(|e| match e {
                RepoError::Validation(_) => AppError::RoomNotAvailable,
                RepoError::Duplicate(_) => AppError::CannotCreateBooking,
                other => AppError::from(other),
            })?;

        Ok(BookingId {
            booking_id: booking.id,
        })
    }

    /// Move an existing booking to another room.
    ///
    /// A user without a prior booking cannot "change" one. This path
    /// intentionally mirrors the reference behavior and does not re-run
    /// the eligibility gate.
    pub async fn change_room(&self, user_id: i64, new_room_id: i64) -> AppResult<BookingId> {
        let room = self
            .hotels
            .find_room_by_id(new_room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".into()))?;

        if self.bookings.find_by_user_id(user_id).await?.is_none() {
            return Err(AppError::CannotCreateBooking);
        }

        let occupancy = self.bookings.count_by_room_id(room.id).await?;
        if occupancy >= room.capacity {
            return Err(AppError::RoomNotAvailable);
        }

        let booking = self
            .bookings
            .update_room_by_user_id(user_id, room.id)
            .await
            .map_err(|e| match e {
                RepoError::Validation(_) => AppError::RoomNotAvailable,
                other => AppError::from(other),
            })?;

        Ok(BookingId {
            booking_id: booking.id,
        })
    }
}
