//! Hotel Catalog
//!
//! Thin read-only flows sharing the eligibility gate with bookings.

use shared::models::{Hotel, HotelWithRooms};

use crate::db::repository::HotelRepository;
use crate::services::EligibilityService;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct HotelService {
    eligibility: EligibilityService,
    hotels: HotelRepository,
}

impl HotelService {
    pub fn new(eligibility: EligibilityService, hotels: HotelRepository) -> Self {
        Self {
            eligibility,
            hotels,
        }
    }

    /// All hotels; an empty catalog is a not-found, matching the
    /// reference behavior.
    pub async fn list(&self, user_id: i64) -> AppResult<Vec<Hotel>> {
        self.eligibility
            .require_paid_accommodation_eligible(user_id)
            .await?;

        let hotels = self.hotels.list_hotels().await?;
        if hotels.is_empty() {
            return Err(AppError::NotFound("No hotels found".into()));
        }

        Ok(hotels)
    }

    pub async fn get_with_rooms(&self, user_id: i64, hotel_id: i64) -> AppResult<HotelWithRooms> {
        self.eligibility
            .require_paid_accommodation_eligible(user_id)
            .await?;

        self.hotels
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".into()))
    }
}
