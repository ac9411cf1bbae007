//! Ticket Lifecycle Manager
//!
//! Creates tickets for enrolled users, enforcing one ticket per
//! enrollment, and exposes the catalog and the user's current ticket.

use shared::models::{TicketCreate, TicketType, TicketWithType};

use crate::db::repository::{EnrollmentRepository, RepoError, TicketRepository};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct TicketService {
    enrollments: EnrollmentRepository,
    tickets: TicketRepository,
}

impl TicketService {
    pub fn new(enrollments: EnrollmentRepository, tickets: TicketRepository) -> Self {
        Self {
            enrollments,
            tickets,
        }
    }

    /// Catalog listing, no side effects
    pub async fn get_types(&self) -> AppResult<Vec<TicketType>> {
        Ok(self.tickets.list_types().await?)
    }

    /// Create a RESERVED ticket for the user's enrollment.
    ///
    /// The duplicate lookup exists to produce the right error; the
    /// insert itself is conditional on the enrollment having no ticket,
    /// so a racing second create still loses and maps to the same 409.
    pub async fn create(
        &self,
        user_id: i64,
        ticket_type_id: Option<i64>,
    ) -> AppResult<TicketWithType> {
        let Some(ticket_type_id) = ticket_type_id else {
            return Err(AppError::MissingTicketTypeId);
        };

        if self.tickets.find_type_by_id(ticket_type_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Ticket type {ticket_type_id} not found"
            )));
        }

        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::EnrollmentRequired)?;

        if self
            .tickets
            .find_by_enrollment_id(enrollment.enrollment.id)
            .await?
            .is_some()
        {
            return Err(AppError::CannotBuyMoreThanOneTicket);
        }

        let created = self
            .tickets
            .create(TicketCreate {
                ticket_type_id,
                enrollment_id: enrollment.enrollment.id,
            })
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => AppError::CannotBuyMoreThanOneTicket,
                other => AppError::from(other),
            })?;

        Ok(created)
    }

    /// The user's current ticket, joined with its type
    pub async fn get_by_user(&self, user_id: i64) -> AppResult<TicketWithType> {
        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::EnrollmentRequired)?;

        self.tickets
            .find_by_enrollment_id(enrollment.enrollment.id)
            .await?
            .ok_or(AppError::UserHasNoTicket)
    }
}
