//! Booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Booking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bookings).post(handler::create_booking))
        .route("/limits", get(handler::get_booking_limits))
        .route("/validate", post(handler::validate_booking))
        .route("/{id}/cancel", post(handler::cancel_booking))
}
