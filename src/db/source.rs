//! Read-only lookups used by the booking eligibility engine.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        BookingRepository, ProfileRepository, SessionRepository, SubscriptionRepository,
    },
    error::AppResult,
    models::{Booking, Profile, Session, Subscription},
};

/// Everything the eligibility engine needs to know about a user and a session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingDataSource: Send + Sync {
    async fn find_session(&self, session_id: Uuid) -> AppResult<Option<Session>>;

    /// The user's single active subscription, if any
    async fn find_active_subscription(&self, user_id: Uuid) -> AppResult<Option<Subscription>>;

    /// Bookings with active status, no time filter
    async fn find_active_bookings(&self, user_id: Uuid) -> AppResult<Vec<Booking>>;

    /// Active bookings on STANDARD sessions scheduled in the given UTC month
    async fn count_monthly_standard_bookings(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<i64>;

    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;
}

/// Postgres-backed data source
#[derive(Clone)]
pub struct PgBookingDataSource {
    pool: PgPool,
}

impl PgBookingDataSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingDataSource for PgBookingDataSource {
    async fn find_session(&self, session_id: Uuid) -> AppResult<Option<Session>> {
        SessionRepository::find_by_id(&self.pool, &session_id).await
    }

    async fn find_active_subscription(&self, user_id: Uuid) -> AppResult<Option<Subscription>> {
        SubscriptionRepository::find_active_by_user(&self.pool, &user_id).await
    }

    async fn find_active_bookings(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        BookingRepository::find_active_by_user(&self.pool, &user_id).await
    }

    async fn count_monthly_standard_bookings(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<i64> {
        BookingRepository::count_active_standard_in_month(&self.pool, &user_id, year, month).await
    }

    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        ProfileRepository::find_by_user(&self.pool, &user_id).await
    }
}
