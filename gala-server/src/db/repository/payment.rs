//! Payment Repository

use super::RepoResult;
use shared::models::{Payment, PaymentCreate, TicketStatus};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_ticket_id(&self, ticket_id: i64) -> RepoResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            "SELECT id, ticket_id, value, card_issuer, card_last_digits \
             FROM payment WHERE ticket_id = ?",
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(payment)
    }

    /// Record a payment and flip the ticket to PAID in one transaction.
    ///
    /// Either both writes land or neither does; a second payment for the
    /// same ticket hits the UNIQUE(ticket_id) constraint and rolls the
    /// status update back with it.
    pub async fn create(&self, data: PaymentCreate) -> RepoResult<Payment> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE ticket SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?")
            .bind(TicketStatus::Paid)
            .bind(data.ticket_id)
            .execute(&mut *tx)
            .await?;

        let payment = sqlx::query_as::<_, Payment>(
            "INSERT INTO payment (ticket_id, value, card_issuer, card_last_digits) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, ticket_id, value, card_issuer, card_last_digits",
        )
        .bind(data.ticket_id)
        .bind(data.value)
        .bind(&data.card_issuer)
        .bind(&data.card_last_digits)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(payment)
    }
}
