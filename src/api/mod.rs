//! Client side of the reservation backend.

pub mod backend;
pub mod models;

pub use backend::{HttpBackend, ReservationBackend};
pub use models::{AvailabilityResponse, BookingRequest, BookingResponse, HealthResponse};
