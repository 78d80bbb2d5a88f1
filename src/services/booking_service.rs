//! Booking service
//!
//! Turns an eligibility verdict into a booking. The engine itself never
//! writes; capacity and duplicate races are settled here inside a transaction.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::messages,
    db::repositories::{BookingRepository, SessionRepository},
    error::{AppError, AppResult},
    models::{Booking, BookingEligibilityResult, BookingStatus},
    services::BookingValidationService,
};

/// Booking service for business logic
pub struct BookingService;

impl BookingService {
    /// Book a session for a user once every rule admits it
    pub async fn create_booking(
        pool: &PgPool,
        validator: &BookingValidationService,
        user_id: &Uuid,
        session_id: &Uuid,
    ) -> AppResult<Booking> {
        let verdict = validator.validate_booking(*user_id, *session_id).await?;
        Self::ensure_admitted(verdict)?;

        let mut tx = pool.begin().await?;

        if !SessionRepository::reserve_spot(&mut tx, session_id).await? {
            return Err(AppError::Conflict(messages::SESSION_FULL.to_string()));
        }

        let booking = BookingRepository::create(&mut tx, user_id, session_id)
            .await
            .map_err(|e| match e {
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists(messages::ALREADY_BOOKED.to_string())
                }
                other => other,
            })?;

        tx.commit().await?;

        info!(
            booking_id = %booking.id,
            %user_id,
            %session_id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Cancel one of the caller's active bookings and free its spot
    pub async fn cancel_booking(
        pool: &PgPool,
        user_id: &Uuid,
        booking_id: &Uuid,
    ) -> AppResult<Booking> {
        let mut tx = pool.begin().await?;

        let Some(cancelled) = BookingRepository::transition_active(
            &mut tx,
            booking_id,
            user_id,
            BookingStatus::Cancelled,
        )
        .await?
        else {
            tx.rollback().await?;
            return Err(Self::not_cancellable(pool, user_id, booking_id).await);
        };

        SessionRepository::release_spot(&mut tx, &cancelled.session_id).await?;
        tx.commit().await?;

        info!(
            %booking_id,
            %user_id,
            session_id = %cancelled.session_id,
            "Booking cancelled"
        );

        Ok(cancelled)
    }

    /// List a user's bookings, newest first, with the total count
    pub async fn list_bookings(
        pool: &PgPool,
        user_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Booking>, i64)> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);

        let (bookings, total) = futures::try_join!(
            BookingRepository::list_by_user(pool, user_id, offset, i64::from(per_page)),
            BookingRepository::count_by_user(pool, user_id),
        )?;

        Ok((bookings, total))
    }

    /// Explain why a cancel matched no active booking
    async fn not_cancellable(pool: &PgPool, user_id: &Uuid, booking_id: &Uuid) -> AppError {
        match BookingRepository::find_by_id(pool, booking_id).await {
            Ok(Some(booking)) if booking.user_id == *user_id => AppError::Validation(format!(
                "Only active bookings can be cancelled; this booking is {}",
                booking.status
            )),
            Ok(_) => AppError::NotFound("Booking not found".to_string()),
            Err(e) => e,
        }
    }

    /// Map a rejected verdict onto the error the API reports
    fn ensure_admitted(verdict: BookingEligibilityResult) -> AppResult<()> {
        if verdict.is_allowed {
            return Ok(());
        }

        if verdict.reasons.iter().any(|r| r == messages::SESSION_NOT_FOUND) {
            return Err(AppError::NotFound(messages::SESSION_NOT_FOUND.to_string()));
        }

        Err(AppError::BookingRejected(Box::new(verdict)))
    }
}
