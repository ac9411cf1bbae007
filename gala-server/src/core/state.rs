use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    BookingRepository, EnrollmentRepository, HotelRepository, PaymentRepository, TicketRepository,
};
use crate::services::{
    BookingService, EligibilityService, HotelService, PaymentService, TicketService,
};
use crate::utils::AppError;

/// Server state — holds shared references to every service
///
/// Built once at startup; handlers reach their service through it.
/// Repositories are constructed here and injected into the services
/// that consume them, so component wiring lives in exactly one place.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: SqlitePool,
    /// JWT validation service
    pub jwt_service: Arc<JwtService>,
    /// Ticket lifecycle manager
    pub tickets: TicketService,
    /// Hotel catalog
    pub hotels: HotelService,
    /// Room capacity allocator
    pub bookings: BookingService,
    /// Payment processor
    pub payments: PaymentService,
}

impl ServerState {
    /// Initialize the full service graph
    ///
    /// 1. Database pool + migrations
    /// 2. Repositories over the pool
    /// 3. Services over the repositories
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_url).await?;
        let pool = db_service.pool;

        Ok(Self::with_pool(config.clone(), pool))
    }

    /// Wire services over an existing pool (used by tests)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let enrollments = EnrollmentRepository::new(pool.clone());
        let ticket_repo = TicketRepository::new(pool.clone());
        let hotel_repo = HotelRepository::new(pool.clone());
        let booking_repo = BookingRepository::new(pool.clone());
        let payment_repo = PaymentRepository::new(pool.clone());

        let eligibility = EligibilityService::new(enrollments.clone(), ticket_repo.clone());

        let tickets = TicketService::new(enrollments, ticket_repo.clone());
        let hotels = HotelService::new(eligibility.clone(), hotel_repo.clone());
        let bookings = BookingService::new(eligibility, hotel_repo, booking_repo);
        let payments = PaymentService::new(ticket_repo, payment_repo);

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self {
            config,
            db: pool,
            jwt_service,
            tickets,
            hotels,
            bookings,
            payments,
        }
    }

    /// JWT service handle
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
