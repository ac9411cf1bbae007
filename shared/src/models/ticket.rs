//! Ticket Model

use serde::{Deserialize, Serialize};

/// Ticket lifecycle status
///
/// Only ever moves RESERVED -> PAID, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum TicketStatus {
    Reserved,
    Paid,
}

/// Ticket type catalog entry (immutable reference data)
///
/// `price` is integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Ticket entity — one per enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub ticket_type_id: i64,
    pub enrollment_id: i64,
    pub status: TicketStatus,
}

/// Ticket joined with its catalog type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWithType {
    pub id: i64,
    pub ticket_type_id: i64,
    pub enrollment_id: i64,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

/// Create ticket payload (always starts RESERVED)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreate {
    pub ticket_type_id: i64,
    pub enrollment_id: i64,
}

/// Create ticket type payload (catalog seeding)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeCreate {
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}
