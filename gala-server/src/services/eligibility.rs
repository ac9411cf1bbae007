//! Eligibility Gate
//!
//! Shared predicate consumed by the hotel and booking flows: the user
//! must hold a PAID, in-person ticket that includes accommodation.
//! Eligibility is re-derived from storage on every call — ticket state
//! changes between requests, so nothing here is cached.

use shared::models::TicketStatus;

use crate::db::repository::{EnrollmentRepository, TicketRepository};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EligibilityService {
    enrollments: EnrollmentRepository,
    tickets: TicketRepository,
}

impl EligibilityService {
    pub fn new(enrollments: EnrollmentRepository, tickets: TicketRepository) -> Self {
        Self {
            enrollments,
            tickets,
        }
    }

    /// Fail with `PaymentRequired` unless the user's ticket is PAID,
    /// non-remote and accommodation-inclusive.
    ///
    /// Missing enrollment and missing ticket collapse into the same
    /// error as an ineligible ticket: an unauthorized prober must not
    /// learn which precondition failed.
    pub async fn require_paid_accommodation_eligible(&self, user_id: i64) -> AppResult<()> {
        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::PaymentRequired)?;

        let ticket = self
            .tickets
            .find_by_enrollment_id(enrollment.enrollment.id)
            .await?
            .ok_or(AppError::PaymentRequired)?;

        let ticket_type = &ticket.ticket_type;
        if ticket.status != TicketStatus::Paid || ticket_type.is_remote || !ticket_type.includes_hotel
        {
            return Err(AppError::PaymentRequired);
        }

        Ok(())
    }
}
