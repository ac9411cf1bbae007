//! Payment processor tests

mod common;

use common::*;
use gala_server::AppError;
use shared::models::{CardData, TicketStatus};

fn card() -> CardData {
    CardData {
        issuer: "VISA".to_string(),
        number: "4111111111111111".to_string(),
        name: "JANE ATTENDEE".to_string(),
        expiration_date: "12/29".to_string(),
        cvv: "123".to_string(),
    }
}

#[tokio::test]
async fn create_requires_ticket_and_card_data() {
    let state = setup_state().await;

    let err = state.payments.create(1, None, Some(card())).await.unwrap_err();
    assert!(matches!(err, AppError::IncompletePaymentInformation));

    let err = state.payments.create(1, Some(1), None).await.unwrap_err();
    assert!(matches!(err, AppError::IncompletePaymentInformation));
}

#[tokio::test]
async fn create_rejects_an_unknown_ticket() {
    let state = setup_state().await;

    let err = state
        .payments
        .create(1, Some(999), Some(card()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TicketNotFound));
}

#[tokio::test]
async fn paying_someone_elses_ticket_is_rejected_with_no_side_effects() {
    let state = setup_state().await;
    let enrollment = create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let ticket = create_reserved_ticket(&state, enrollment.enrollment.id, ticket_type.id).await;

    // User 2 tries to pay user 1's ticket
    let err = state
        .payments
        .create(2, Some(ticket.id), Some(card()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UserHasNoTicketId));

    // No payment row, status untouched
    let count = count_rows(
        &state,
        "SELECT COUNT(*) FROM payment WHERE ticket_id = ?",
        ticket.id,
    )
    .await;
    assert_eq!(count, 0);

    let reloaded = tickets(&state).find_by_id(ticket.id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, TicketStatus::Reserved);
}

#[tokio::test]
async fn create_pays_the_ticket_and_records_only_the_last_digits() {
    let state = setup_state().await;
    let enrollment = create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let ticket = create_reserved_ticket(&state, enrollment.enrollment.id, ticket_type.id).await;

    let payment = state
        .payments
        .create(1, Some(ticket.id), Some(card()))
        .await
        .unwrap();

    assert_eq!(payment.ticket_id, ticket.id);
    assert_eq!(payment.value, ticket_type.price);
    assert_eq!(payment.card_issuer, "VISA");
    assert_eq!(payment.card_last_digits, "1111");

    let reloaded = tickets(&state).find_by_id(ticket.id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, TicketStatus::Paid);
}

#[tokio::test]
async fn a_ticket_is_paid_at_most_once() {
    let state = setup_state().await;
    let enrollment = create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let ticket = create_reserved_ticket(&state, enrollment.enrollment.id, ticket_type.id).await;

    state
        .payments
        .create(1, Some(ticket.id), Some(card()))
        .await
        .unwrap();

    let err = state
        .payments
        .create(1, Some(ticket.id), Some(card()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let count = count_rows(
        &state,
        "SELECT COUNT(*) FROM payment WHERE ticket_id = ?",
        ticket.id,
    )
    .await;
    assert_eq!(count, 1);
}

#[tokio::test]
async fn get_by_ticket_id_applies_the_same_ownership_checks() {
    let state = setup_state().await;
    let enrollment = create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let ticket = create_reserved_ticket(&state, enrollment.enrollment.id, ticket_type.id).await;

    let err = state.payments.get_by_ticket_id(1, None).await.unwrap_err();
    assert!(matches!(err, AppError::IncompletePaymentInformation));

    let err = state
        .payments
        .get_by_ticket_id(1, Some(999))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TicketNotFound));

    let err = state
        .payments
        .get_by_ticket_id(2, Some(ticket.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UserHasNoTicketId));

    // Owned but unpaid: the payment row simply is not there yet
    let err = state
        .payments
        .get_by_ticket_id(1, Some(ticket.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn get_by_ticket_id_is_idempotent() {
    let state = setup_state().await;
    let enrollment = create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let ticket = create_reserved_ticket(&state, enrollment.enrollment.id, ticket_type.id).await;

    let created = state
        .payments
        .create(1, Some(ticket.id), Some(card()))
        .await
        .unwrap();

    let first = state
        .payments
        .get_by_ticket_id(1, Some(ticket.id))
        .await
        .unwrap();
    let second = state
        .payments
        .get_by_ticket_id(1, Some(ticket.id))
        .await
        .unwrap();

    assert_eq!(first.id, created.id);
    assert_eq!(first.id, second.id);
    assert_eq!(first.value, second.value);
    assert_eq!(first.card_last_digits, second.card_last_digits);
}
