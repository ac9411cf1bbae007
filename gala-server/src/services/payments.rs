//! Payment Processor
//!
//! Validates a ticket is payable by the caller, records the payment and
//! flips the ticket to PAID. Full card data is accepted as input but
//! only the last 4 digits are ever persisted.

use shared::models::{CardData, Payment, PaymentCreate};

use crate::db::repository::{PaymentRepository, RepoError, TicketRepository};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct PaymentService {
    tickets: TicketRepository,
    payments: PaymentRepository,
}

impl PaymentService {
    pub fn new(tickets: TicketRepository, payments: PaymentRepository) -> Self {
        Self { tickets, payments }
    }

    pub async fn create(
        &self,
        user_id: i64,
        ticket_id: Option<i64>,
        card_data: Option<CardData>,
    ) -> AppResult<Payment> {
        let (Some(ticket_id), Some(card_data)) = (ticket_id, card_data) else {
            return Err(AppError::IncompletePaymentInformation);
        };

        self.require_owned_ticket(ticket_id, user_id).await?;

        let value = self
            .tickets
            .price_by_ticket_id(ticket_id)
            .await?
            .ok_or(AppError::TicketNotFound)?;

        let payment = self
            .payments
            .create(PaymentCreate {
                ticket_id,
                value,
                card_issuer: card_data.issuer,
                card_last_digits: last_digits(&card_data.number),
            })
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => {
                    AppError::Conflict(format!("Ticket {ticket_id} is already paid"))
                }
                other => AppError::from(other),
            })?;

        Ok(payment)
    }

    pub async fn get_by_ticket_id(&self, user_id: i64, ticket_id: Option<i64>) -> AppResult<Payment> {
        let Some(ticket_id) = ticket_id else {
            return Err(AppError::IncompletePaymentInformation);
        };

        self.require_owned_ticket(ticket_id, user_id).await?;

        self.payments
            .find_by_ticket_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".into()))
    }

    /// Existence first, ownership second: a caller probing someone
    /// else's ticket id gets a 401, a bogus id a 404.
    async fn require_owned_ticket(&self, ticket_id: i64, user_id: i64) -> AppResult<()> {
        if self.tickets.find_by_id(ticket_id).await?.is_none() {
            return Err(AppError::TicketNotFound);
        }
        if self
            .tickets
            .find_by_id_and_user_id(ticket_id, user_id)
            .await?
            .is_none()
        {
            return Err(AppError::UserHasNoTicketId);
        }
        Ok(())
    }
}

/// Last 4 characters of the card number; shorter inputs are kept whole.
fn last_digits(number: &str) -> String {
    let digits: Vec<char> = number.chars().collect();
    let start = digits.len().saturating_sub(4);
    digits[start..].iter().collect()
}
