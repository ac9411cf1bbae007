//! Ticket Repository

use super::{RepoError, RepoResult};
use shared::models::{Ticket, TicketCreate, TicketStatus, TicketType, TicketTypeCreate, TicketWithType};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

#[derive(Clone)]
pub struct TicketRepository {
    pool: SqlitePool,
}

impl TicketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Full ticket type catalog
    pub async fn list_types(&self) -> RepoResult<Vec<TicketType>> {
        let types = sqlx::query_as::<_, TicketType>(
            "SELECT id, name, price, is_remote, includes_hotel FROM ticket_type ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }

    /// Insert a catalog entry (seeding)
    pub async fn create_type(&self, data: TicketTypeCreate) -> RepoResult<TicketType> {
        let ticket_type = sqlx::query_as::<_, TicketType>(
            "INSERT INTO ticket_type (name, price, is_remote, includes_hotel) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, name, price, is_remote, includes_hotel",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.is_remote)
        .bind(data.includes_hotel)
        .fetch_one(&self.pool)
        .await?;
        Ok(ticket_type)
    }

    pub async fn find_type_by_id(&self, id: i64) -> RepoResult<Option<TicketType>> {
        let ticket_type = sqlx::query_as::<_, TicketType>(
            "SELECT id, name, price, is_remote, includes_hotel FROM ticket_type WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ticket_type)
    }

    /// The enrollment's ticket, joined with its catalog type
    pub async fn find_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> RepoResult<Option<TicketWithType>> {
        let row = sqlx::query(
            "SELECT t.id, t.ticket_type_id, t.enrollment_id, t.status, \
                    tt.name AS type_name, tt.price, tt.is_remote, tt.includes_hotel \
             FROM ticket t \
             JOIN ticket_type tt ON tt.id = t.ticket_type_id \
             WHERE t.enrollment_id = ?",
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| ticket_with_type_from_row(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT id, ticket_type_id, enrollment_id, status FROM ticket WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ticket)
    }

    /// Ticket by id, but only when its enrollment belongs to `user_id`.
    ///
    /// Single joined query: checking ticket and owner separately could
    /// produce a false result if the enrollment changes between reads.
    pub async fn find_by_id_and_user_id(
        &self,
        id: i64,
        user_id: i64,
    ) -> RepoResult<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT t.id, t.ticket_type_id, t.enrollment_id, t.status \
             FROM ticket t \
             JOIN enrollment e ON e.id = t.enrollment_id \
             WHERE t.id = ? AND e.user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ticket)
    }

    /// Insert a RESERVED ticket for an enrollment that has none yet.
    ///
    /// The insert is conditional on no ticket existing for the
    /// enrollment, and the enrollment_id column is UNIQUE — two racing
    /// creates cannot both succeed. Losing the race surfaces as
    /// [`RepoError::Duplicate`].
    pub async fn create(&self, data: TicketCreate) -> RepoResult<TicketWithType> {
        let result = sqlx::query(
            "INSERT INTO ticket (ticket_type_id, enrollment_id, status) \
             SELECT ?1, ?2, ?3 \
             WHERE NOT EXISTS (SELECT 1 FROM ticket WHERE enrollment_id = ?2)",
        )
        .bind(data.ticket_type_id)
        .bind(data.enrollment_id)
        .bind(TicketStatus::Reserved)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::Duplicate(format!(
                "enrollment {} already has a ticket",
                data.enrollment_id
            )));
        }

        self.find_by_enrollment_id(data.enrollment_id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create ticket".into()))
    }

    /// One-way RESERVED -> PAID transition
    pub async fn update_status_to_paid(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE ticket SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(TicketStatus::Paid)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Ticket {id} not found")));
        }
        Ok(())
    }

    /// Price of the ticket's catalog type, in cents
    pub async fn price_by_ticket_id(&self, id: i64) -> RepoResult<Option<i64>> {
        let price = sqlx::query_scalar::<_, i64>(
            "SELECT tt.price FROM ticket t \
             JOIN ticket_type tt ON tt.id = t.ticket_type_id \
             WHERE t.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(price)
    }
}

fn ticket_with_type_from_row(row: &SqliteRow) -> RepoResult<TicketWithType> {
    let ticket_type_id: i64 = row.try_get("ticket_type_id").map_err(RepoError::from)?;
    Ok(TicketWithType {
        id: row.try_get("id").map_err(RepoError::from)?,
        ticket_type_id,
        enrollment_id: row.try_get("enrollment_id").map_err(RepoError::from)?,
        status: row.try_get("status").map_err(RepoError::from)?,
        ticket_type: TicketType {
            id: ticket_type_id,
            name: row.try_get("type_name").map_err(RepoError::from)?,
            price: row.try_get("price").map_err(RepoError::from)?,
            is_remote: row.try_get("is_remote").map_err(RepoError::from)?,
            includes_hotel: row.try_get("includes_hotel").map_err(RepoError::from)?,
        },
    })
}
