//! Enrollment Repository

use super::RepoResult;
use shared::models::{Address, Enrollment, EnrollmentCreate, EnrollmentWithAddress};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: SqlitePool,
}

impl EnrollmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Enrollment for a user, joined with its optional address
    pub async fn find_by_user_id(&self, user_id: i64) -> RepoResult<Option<EnrollmentWithAddress>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, name, cpf, birthday, phone FROM enrollment WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(enrollment) = enrollment else {
            return Ok(None);
        };

        let address = sqlx::query_as::<_, Address>(
            "SELECT id, enrollment_id, cep, street, number, city, state, neighborhood, address_detail \
             FROM address WHERE enrollment_id = ?",
        )
        .bind(enrollment.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(EnrollmentWithAddress {
            enrollment,
            address,
        }))
    }

    /// Insert an enrollment (and its address, when present)
    ///
    /// `enrollment.user_id` is unique; a second insert for the same user
    /// surfaces as [`super::RepoError::Duplicate`].
    pub async fn create(&self, data: EnrollmentCreate) -> RepoResult<EnrollmentWithAddress> {
        let mut tx = self.pool.begin().await?;

        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollment (user_id, name, cpf, birthday, phone) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, user_id, name, cpf, birthday, phone",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.cpf)
        .bind(data.birthday)
        .bind(&data.phone)
        .fetch_one(&mut *tx)
        .await?;

        let address = match data.address {
            Some(addr) => Some(
                sqlx::query_as::<_, Address>(
                    "INSERT INTO address (enrollment_id, cep, street, number, city, state, neighborhood, address_detail) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
                     RETURNING id, enrollment_id, cep, street, number, city, state, neighborhood, address_detail",
                )
                .bind(enrollment.id)
                .bind(&addr.cep)
                .bind(&addr.street)
                .bind(&addr.number)
                .bind(&addr.city)
                .bind(&addr.state)
                .bind(&addr.neighborhood)
                .bind(&addr.address_detail)
                .fetch_one(&mut *tx)
                .await?,
            ),
            None => None,
        };

        tx.commit().await?;

        Ok(EnrollmentWithAddress {
            enrollment,
            address,
        })
    }
}
