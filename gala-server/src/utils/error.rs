//! Unified Error Handling
//!
//! Provides application-wide error types and response structures:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - API response envelope
//!
//! Every failure carries a stable kind (the `code` field of the response
//! envelope) plus a human-readable message. Nothing is retried here;
//! handlers surface errors as-is and this module maps them onto HTTP
//! statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Unified API response structure
///
/// ```json
/// {
///   "code": "Success",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication Errors ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    // ========== Not-found Errors ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("User is not enrolled in the event")]
    EnrollmentRequired,

    #[error("User has no ticket")]
    UserHasNoTicket,

    #[error("Ticket does not exist")]
    TicketNotFound,

    // ========== Eligibility Errors ==========
    #[error("Ticket must be paid, in person and include accommodation")]
    PaymentRequired,

    #[error("User cannot buy more than one ticket")]
    CannotBuyMoreThanOneTicket,

    #[error("The property ticketTypeId is missing")]
    MissingTicketTypeId,

    #[error("ticketId and/or cardData is missing in request body")]
    IncompletePaymentInformation,

    #[error("Ticket does not belong to the user")]
    UserHasNoTicketId,

    #[error("User must have a paid in-person ticket including accommodation and an existing booking")]
    CannotCreateBooking,

    // ========== Capacity Errors ==========
    #[error("Room has no available space")]
    RoomNotAvailable,

    // ========== Generic Business Errors ==========
    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System Errors ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error kind, used as the `code` field of the response
    /// envelope. Never changes once clients depend on it.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized",
            AppError::TokenExpired => "TokenExpired",
            AppError::InvalidToken => "InvalidToken",
            AppError::NotFound(_) => "NotFound",
            AppError::EnrollmentRequired => "EnrollmentRequired",
            AppError::UserHasNoTicket => "UserHasNoTicket",
            AppError::TicketNotFound => "TicketNotFound",
            AppError::PaymentRequired => "PaymentRequired",
            AppError::CannotBuyMoreThanOneTicket => "CannotBuyMoreThanOneTicket",
            AppError::MissingTicketTypeId => "MissingTicketTypeId",
            AppError::IncompletePaymentInformation => "IncompletePaymentInformation",
            AppError::UserHasNoTicketId => "UserHasNoTicketId",
            AppError::CannotCreateBooking => "CannotCreateBooking",
            AppError::RoomNotAvailable => "RoomNotAvailable",
            AppError::Conflict(_) => "Conflict",
            AppError::Validation(_) => "Validation",
            AppError::Database(_) => "Database",
            AppError::Internal(_) => "Internal",
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::TokenExpired | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            // Ownership failures deliberately read as 401, not 404: the
            // caller holds a valid session but no claim on this ticket.
            AppError::UserHasNoTicketId => StatusCode::UNAUTHORIZED,
            AppError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            AppError::CannotCreateBooking | AppError::RoomNotAvailable => StatusCode::FORBIDDEN,
            AppError::NotFound(_)
            | AppError::EnrollmentRequired
            | AppError::UserHasNoTicket
            | AppError::TicketNotFound => StatusCode::NOT_FOUND,
            AppError::CannotBuyMoreThanOneTicket | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MissingTicketTypeId
            | AppError::IncompletePaymentInformation
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Database/internal details stay in the logs, not the response
        let message = match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(AppResponse::<()> {
            code: self.kind().to_string(),
            message,
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<crate::db::repository::RepoError> for AppError {
    fn from(e: crate::db::repository::RepoError) -> Self {
        use crate::db::repository::RepoError;
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "Success".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}
