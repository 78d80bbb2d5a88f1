//! Session repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Session,
};

/// Database row for a session
#[derive(Debug, FromRow)]
struct SessionRow {
    id: Uuid,
    title: String,
    scheduled_at: DateTime<Utc>,
    duration_minutes: i32,
    max_participants: i32,
    current_participants: i32,
    required_points: i32,
    session_type: String,
    is_active: bool,
}

impl TryFrom<SessionRow> for Session {
    type Error = AppError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        Ok(Session {
            id: row.id,
            title: row.title,
            scheduled_at: row.scheduled_at,
            duration_minutes: row.duration_minutes,
            max_participants: row.max_participants,
            current_participants: row.current_participants,
            required_points: row.required_points,
            session_type: row.session_type.parse()?,
            is_active: row.is_active,
        })
    }
}

/// Repository for session database operations
pub struct SessionRepository;

impl SessionRepository {
    /// Find session by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, title, scheduled_at, duration_minutes, max_participants,
                   current_participants, required_points, session_type, is_active
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(Session::try_from).transpose()
    }

    /// Take one seat if the session is active and not full.
    ///
    /// Returns `false` when no seat was taken.
    pub async fn reserve_spot(conn: &mut PgConnection, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET current_participants = current_participants + 1, updated_at = NOW()
            WHERE id = $1 AND is_active AND current_participants < max_participants
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Give back one seat
    pub async fn release_spot(conn: &mut PgConnection, id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET current_participants = GREATEST(current_participants - 1, 0), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
