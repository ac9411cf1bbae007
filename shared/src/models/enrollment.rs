//! Enrollment Model

use serde::{Deserialize, Serialize};

/// Enrollment entity — a user's registration record for the event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub cpf: String,
    pub birthday: Option<chrono::NaiveDate>,
    pub phone: String,
}

/// Address entity (zero-or-one per enrollment)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub enrollment_id: i64,
    pub cep: String,
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

/// Enrollment joined with its optional address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithAddress {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub address: Option<Address>,
}

/// Create enrollment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreate {
    pub user_id: i64,
    pub name: String,
    pub cpf: String,
    pub birthday: Option<chrono::NaiveDate>,
    pub phone: String,
    pub address: Option<AddressCreate>,
}

/// Create address payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    pub cep: String,
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}
