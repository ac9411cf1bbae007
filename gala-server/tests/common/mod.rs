//! Shared test setup and factories
//!
//! Every test runs against its own in-memory SQLite database with the
//! real migrations applied, wired through the same `ServerState` the
//! binary uses.

#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use gala_server::auth::JwtConfig;
use gala_server::core::{Config, ServerState};
use gala_server::db::repository::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};
use shared::models::{
    Booking, EnrollmentCreate, EnrollmentWithAddress, Hotel, HotelCreate, Room, RoomCreate,
    TicketCreate, TicketType, TicketTypeCreate, TicketWithType,
};

pub const TEST_JWT_SECRET: &str = "gala-test-secret-with-at-least-32-chars!";

/// Fresh state over an isolated in-memory database
pub async fn setup_state() -> ServerState {
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let mut config = Config::with_overrides("sqlite::memory:", 0);
    config.jwt = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "gala-server".to_string(),
        audience: "gala-clients".to_string(),
    };

    ServerState::with_pool(config, pool)
}

pub fn enrollments(state: &ServerState) -> EnrollmentRepository {
    EnrollmentRepository::new(state.db.clone())
}

pub fn tickets(state: &ServerState) -> TicketRepository {
    TicketRepository::new(state.db.clone())
}

pub fn hotels(state: &ServerState) -> HotelRepository {
    HotelRepository::new(state.db.clone())
}

pub fn bookings(state: &ServerState) -> BookingRepository {
    BookingRepository::new(state.db.clone())
}

// ========== Factories ==========

pub async fn create_enrollment(state: &ServerState, user_id: i64) -> EnrollmentWithAddress {
    enrollments(state)
        .create(EnrollmentCreate {
            user_id,
            name: "Jane Attendee".to_string(),
            cpf: "12345678901".to_string(),
            birthday: None,
            phone: "+55 11 99999-0000".to_string(),
            address: None,
        })
        .await
        .expect("failed to create enrollment")
}

pub async fn create_ticket_type(
    state: &ServerState,
    is_remote: bool,
    includes_hotel: bool,
) -> TicketType {
    tickets(state)
        .create_type(TicketTypeCreate {
            name: "Full Pass".to_string(),
            price: 25_000,
            is_remote,
            includes_hotel,
        })
        .await
        .expect("failed to create ticket type")
}

pub async fn create_reserved_ticket(
    state: &ServerState,
    enrollment_id: i64,
    ticket_type_id: i64,
) -> TicketWithType {
    tickets(state)
        .create(TicketCreate {
            ticket_type_id,
            enrollment_id,
        })
        .await
        .expect("failed to create ticket")
}

pub async fn create_paid_ticket(
    state: &ServerState,
    enrollment_id: i64,
    ticket_type_id: i64,
) -> TicketWithType {
    let repo = tickets(state);
    let ticket = repo
        .create(TicketCreate {
            ticket_type_id,
            enrollment_id,
        })
        .await
        .expect("failed to create ticket");
    repo.update_status_to_paid(ticket.id)
        .await
        .expect("failed to pay ticket");
    repo.find_by_enrollment_id(enrollment_id)
        .await
        .expect("failed to reload ticket")
        .expect("ticket vanished")
}

/// Enroll a user and hand them a PAID in-person ticket with
/// accommodation — the fully eligible baseline.
pub async fn create_eligible_user(state: &ServerState, user_id: i64) -> TicketWithType {
    let enrollment = create_enrollment(state, user_id).await;
    let ticket_type = create_ticket_type(state, false, true).await;
    create_paid_ticket(state, enrollment.enrollment.id, ticket_type.id).await
}

pub async fn create_hotel(state: &ServerState) -> Hotel {
    hotels(state)
        .create_hotel(HotelCreate {
            name: "Grand Meridian".to_string(),
            image: "https://example.com/hotel.png".to_string(),
        })
        .await
        .expect("failed to create hotel")
}

pub async fn create_room(state: &ServerState, hotel_id: i64, capacity: i64) -> Room {
    hotels(state)
        .create_room(RoomCreate {
            name: "101".to_string(),
            capacity,
            hotel_id,
        })
        .await
        .expect("failed to create room")
}

pub async fn create_booking(state: &ServerState, user_id: i64, room_id: i64) -> Booking {
    bookings(state)
        .create(user_id, room_id)
        .await
        .expect("failed to create booking")
}

// ========== Assertions helpers ==========

pub async fn count_rows(state: &ServerState, sql: &str, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_one(&state.db)
        .await
        .expect("count query failed")
}
