//! Booking repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingStatus, SessionType},
    utils::month_bounds,
};

#[derive(Debug, FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: Uuid,
    session_id: Uuid,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: row.id,
            user_id: row.user_id,
            session_id: row.session_id,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_bookings(rows: Vec<BookingRow>) -> AppResult<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

/// Repository for booking database operations
pub struct BookingRepository;

impl BookingRepository {
    /// Create a new active booking
    pub async fn create(
        conn: &mut PgConnection,
        user_id: &Uuid,
        session_id: &Uuid,
    ) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (user_id, session_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, session_id, status, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(session_id)
        .bind(BookingStatus::Active.as_str())
        .fetch_one(&mut *conn)
        .await?;

        row.try_into()
    }

    /// Find booking by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, session_id, status, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(Booking::try_from).transpose()
    }

    /// Move one of the user's active bookings to `status`.
    ///
    /// Returns `None` when no such active booking exists, including when a
    /// concurrent transaction moved it first.
    pub async fn transition_active(
        conn: &mut PgConnection,
        id: &Uuid,
        user_id: &Uuid,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            UPDATE bookings
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND status = $4
            RETURNING id, user_id, session_id, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status.as_str())
        .bind(BookingStatus::Active.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        row.map(Booking::try_from).transpose()
    }

    /// All active bookings of a user, regardless of session date
    pub async fn find_active_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, session_id, status, created_at, updated_at
            FROM bookings
            WHERE user_id = $1 AND status = $2
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .bind(BookingStatus::Active.as_str())
        .fetch_all(pool)
        .await?;

        into_bookings(rows)
    }

    /// Count active bookings on STANDARD sessions scheduled in the given UTC month
    pub async fn count_active_standard_in_month(
        pool: &PgPool,
        user_id: &Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<i64> {
        let (start, end) = month_bounds(year, month)
            .ok_or_else(|| AppError::Validation(format!("Invalid month: {}-{}", year, month)))?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM bookings b
            JOIN sessions s ON s.id = b.session_id
            WHERE b.user_id = $1
              AND b.status = $2
              AND s.session_type = $3
              AND s.scheduled_at >= $4
              AND s.scheduled_at < $5
            "#,
        )
        .bind(user_id)
        .bind(BookingStatus::Active.as_str())
        .bind(SessionType::Standard.as_str())
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// List a user's bookings with pagination, newest first
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, session_id, status, created_at, updated_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        into_bookings(rows)
    }

    /// Count all bookings of a user
    pub async fn count_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM bookings WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_booking, insert_session, pool};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    async fn monthly(pool: &PgPool, user: Uuid, year: i32, month: u32) -> i64 {
        BookingRepository::count_active_standard_in_month(pool, &user, year, month)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires Docker for the Postgres container"]
    async fn test_monthly_count_only_active_standard_in_month() {
        let pool = pool().await;
        let user = Uuid::new_v4();
        let other_user = Uuid::new_v4();

        // Counted: both ends of October
        for when in [at(2026, 10, 1, 0, 0, 0), at(2026, 10, 31, 23, 59, 59)] {
            let session = insert_session(&pool, SessionType::Standard, when, 10, 0).await;
            insert_booking(&pool, user, session, BookingStatus::Active).await;
        }

        // Outside the month on either side
        let september =
            insert_session(&pool, SessionType::Standard, at(2026, 9, 30, 23, 59, 59), 10, 0).await;
        insert_booking(&pool, user, september, BookingStatus::Active).await;
        let november =
            insert_session(&pool, SessionType::Standard, at(2026, 11, 1, 0, 0, 0), 10, 0).await;
        insert_booking(&pool, user, november, BookingStatus::Active).await;

        // Wrong session type
        let premium =
            insert_session(&pool, SessionType::Premium, at(2026, 10, 10, 9, 0, 0), 10, 0).await;
        insert_booking(&pool, user, premium, BookingStatus::Active).await;

        // Not active
        let cancelled =
            insert_session(&pool, SessionType::Standard, at(2026, 10, 12, 9, 0, 0), 10, 0).await;
        insert_booking(&pool, user, cancelled, BookingStatus::Cancelled).await;
        let completed =
            insert_session(&pool, SessionType::Standard, at(2026, 10, 13, 9, 0, 0), 10, 0).await;
        insert_booking(&pool, user, completed, BookingStatus::Completed).await;

        // Someone else's booking
        let shared =
            insert_session(&pool, SessionType::Standard, at(2026, 10, 15, 9, 0, 0), 10, 0).await;
        insert_booking(&pool, other_user, shared, BookingStatus::Active).await;

        assert_eq!(monthly(&pool, user, 2026, 10).await, 2);
        assert_eq!(monthly(&pool, user, 2026, 9).await, 1);
        assert_eq!(monthly(&pool, user, 2026, 11).await, 1);
        assert_eq!(monthly(&pool, user, 2026, 12).await, 0);
        assert_eq!(monthly(&pool, other_user, 2026, 10).await, 1);
    }

    #[tokio::test]
    async fn test_monthly_count_rejects_invalid_month() {
        // Fails before touching the database
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/linguabook_test")
            .unwrap();

        let err = BookingRepository::count_active_standard_in_month(&pool, &Uuid::new_v4(), 2026, 13)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    #[ignore = "requires Docker for the Postgres container"]
    async fn test_find_active_by_user_ignores_finished_bookings() {
        let pool = pool().await;
        let user = Uuid::new_v4();
        let when = at(2027, 1, 5, 10, 0, 0);

        let active_session = insert_session(&pool, SessionType::Vip, when, 5, 0).await;
        let active = insert_booking(&pool, user, active_session, BookingStatus::Active).await;
        let old_session = insert_session(&pool, SessionType::Standard, when, 5, 0).await;
        insert_booking(&pool, user, old_session, BookingStatus::Cancelled).await;

        let bookings = BookingRepository::find_active_by_user(&pool, &user).await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, active);
        assert_eq!(bookings[0].session_id, active_session);
        assert!(bookings[0].is_active());
    }

    #[tokio::test]
    #[ignore = "requires Docker for the Postgres container"]
    async fn test_transition_only_moves_active_bookings_of_owner() {
        let pool = pool().await;
        let user = Uuid::new_v4();
        let session = insert_session(&pool, SessionType::Standard, at(2027, 2, 1, 9, 0, 0), 5, 1).await;
        let booking = insert_booking(&pool, user, session, BookingStatus::Active).await;

        let mut conn = pool.acquire().await.unwrap();

        let stranger = BookingRepository::transition_active(
            &mut conn,
            &booking,
            &Uuid::new_v4(),
            BookingStatus::Cancelled,
        )
        .await
        .unwrap();
        assert!(stranger.is_none());

        let first =
            BookingRepository::transition_active(&mut conn, &booking, &user, BookingStatus::Cancelled)
                .await
                .unwrap();
        assert_eq!(first.map(|b| b.status), Some(BookingStatus::Cancelled));

        let second =
            BookingRepository::transition_active(&mut conn, &booking, &user, BookingStatus::Cancelled)
                .await
                .unwrap();
        assert!(second.is_none());
    }
}
