//! LinguaBook - Session Booking Backend
//!
//! This library provides the booking side of the LinguaBook language-learning
//! platform: deciding whether a learner may book a live session, and booking,
//! cancelling and listing sessions once they may.
//!
//! # Booking rules
//!
//! - An active subscription is required
//! - Sessions must be booked at least 24 hours in advance
//! - Standard plans reach STANDARD sessions only and are capped at 4 active
//!   bookings and 4 bookings per calendar month
//! - Premium, monthly and yearly plans reach every session type and are
//!   capped at 2 active bookings
//! - Sessions may require a point balance
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, including the eligibility engine
//! - **Repositories**: Database access
//! - **Models**: Domain models and value objects

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{Router, middleware::from_fn};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes(state.clone()))
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
