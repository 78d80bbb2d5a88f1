//! Booking request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of both the validate and the create endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBookingRequest {
    pub session_id: Uuid,
}

/// List bookings query parameters
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}
