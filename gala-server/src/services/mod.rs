//! Service Module
//!
//! Business rules for the registration flows. Each service owns the
//! repositories it reads and writes, injected at construction; no
//! ambient database handle exists anywhere in this layer.

pub mod bookings;
pub mod eligibility;
pub mod hotels;
pub mod payments;
pub mod tickets;

// Re-exports
pub use bookings::BookingService;
pub use eligibility::EligibilityService;
pub use hotels::HotelService;
pub use payments::PaymentService;
pub use tickets::TicketService;
