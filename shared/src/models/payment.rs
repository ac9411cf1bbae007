//! Payment Model

use serde::{Deserialize, Serialize};

/// Payment entity — one per ticket, immutable once created
///
/// `value` is integer cents copied from the ticket type's price at the
/// moment of payment. Only the last 4 card digits are ever stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub ticket_id: i64,
    pub value: i64,
    pub card_issuer: String,
    pub card_last_digits: String,
}

/// Card data accepted on payment requests
///
/// Never persisted beyond deriving `card_last_digits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub issuer: String,
    pub number: String,
    pub name: String,
    pub expiration_date: String,
    pub cvv: String,
}

/// Create payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub ticket_id: i64,
    pub value: i64,
    pub card_issuer: String,
    pub card_last_digits: String,
}
