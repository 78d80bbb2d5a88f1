//! Booking handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::DEFAULT_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Booking, BookingEligibilityResult, BookingLimitsInfo},
    services::BookingService,
    state::AppState,
};

use super::{
    request::{ListBookingsQuery, SessionBookingRequest},
    response::BookingsListResponse,
};

/// Current-month booking allowance of the caller
pub async fn get_booking_limits(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<BookingLimitsInfo>> {
    let limits = state.validator().get_booking_limits(auth_user.id).await?;
    Ok(Json(limits))
}

/// Dry-run every booking rule; a rejection is still a 200
pub async fn validate_booking(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SessionBookingRequest>,
) -> AppResult<Json<BookingEligibilityResult>> {
    let result = state
        .validator()
        .validate_booking(auth_user.id, payload.session_id)
        .await?;
    Ok(Json(result))
}

/// Book a session
pub async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SessionBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = BookingService::create_booking(
        state.db(),
        state.validator(),
        &auth_user.id,
        &payload.session_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List the caller's bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListBookingsQuery>,
) -> AppResult<Json<BookingsListResponse>> {
    query.validate()?;

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE);

    let (bookings, total) =
        BookingService::list_bookings(state.db(), &auth_user.id, page, per_page).await?;

    Ok(Json(BookingsListResponse {
        bookings,
        total,
        page,
        per_page,
    }))
}

/// Cancel one of the caller's bookings
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = BookingService::cancel_booking(state.db(), &auth_user.id, &id).await?;
    Ok(Json(booking))
}
