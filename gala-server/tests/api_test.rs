//! Router-level tests: auth middleware and wire formats

mod common;

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::*;
use gala_server::JwtService;
use gala_server::core::ServerState;

fn token_for(state: &ServerState, user_id: i64) -> String {
    JwtService::with_config(state.config.jwt.clone())
        .generate_token(user_id)
        .expect("failed to mint test token")
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("failed to read body").to_bytes();
    serde_json::from_slice(&bytes).expect("body is not json")
}

#[tokio::test]
async fn health_is_public() {
    let state = setup_state().await;
    let app = gala_server::api::router(state);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn api_routes_require_a_token() {
    let state = setup_state().await;
    let app = gala_server::api::router(state);

    let response = app
        .oneshot(Request::get("/api/tickets").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_garbage_token_is_rejected() {
    let state = setup_state().await;
    let app = gala_server::api::router(state);

    let response = app
        .oneshot(
            Request::get("/api/tickets")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn ticket_purchase_flow_over_http() {
    let state = setup_state().await;
    create_enrollment(&state, 1).await;
    let ticket_type = create_ticket_type(&state, false, true).await;
    let token = token_for(&state, 1);
    let app = gala_server::api::router(state);

    // Reserve a ticket
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/tickets")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "ticketTypeId": ticket_type.id }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = body_json(response.into_body()).await;
    assert_eq!(ticket["status"], "RESERVED");
    let ticket_id = ticket["id"].as_i64().unwrap();

    // Hotels are still gated: ticket is not paid yet
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/hotels")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);

    // Pay for it
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/payments/process")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "ticketId": ticket_id,
                        "cardData": {
                            "issuer": "VISA",
                            "number": "4111111111111111",
                            "name": "JANE ATTENDEE",
                            "expirationDate": "12/29",
                            "cvv": "123"
                        }
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payment = body_json(response.into_body()).await;
    assert_eq!(payment["cardLastDigits"], "1111");
    assert_eq!(payment["value"].as_i64().unwrap(), ticket_type.price);
}

#[tokio::test]
async fn booking_requests_are_shape_checked() {
    let state = setup_state().await;
    create_eligible_user(&state, 1).await;
    let token = token_for(&state, 1);
    let app = gala_server::api::router(state);

    let response = app
        .oneshot(
            Request::post("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "roomId": 0 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_flow_over_http() {
    let state = setup_state().await;
    create_eligible_user(&state, 1).await;
    let hotel = create_hotel(&state).await;
    let room = create_room(&state, hotel.id, 2).await;
    let token = token_for(&state, 1);
    let app = gala_server::api::router(state);

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "roomId": room.id }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response.into_body()).await;
    let booking_id = created["bookingId"].as_i64().unwrap();
    assert!(booking_id > 0);

    let response = app
        .oneshot(
            Request::get("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let booking = body_json(response.into_body()).await;
    assert_eq!(booking["id"].as_i64().unwrap(), booking_id);
    assert_eq!(booking["room"]["id"].as_i64().unwrap(), room.id);
}
