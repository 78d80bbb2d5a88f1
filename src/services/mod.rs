//! Business logic services

pub mod auth_service;
pub mod booking_service;
pub mod booking_validation_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use booking_validation_service::BookingValidationService;
