//! Booking response DTOs

use serde::Serialize;

use crate::models::Booking;

/// Paginated booking list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsListResponse {
    pub bookings: Vec<Booking>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
