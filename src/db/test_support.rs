//! Postgres-backed test helpers
//!
//! The container is started lazily on first use and shared across tests.
//! Every test seeds rows under fresh UUIDs, so tests never see each other's
//! bookings.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::models::{BookingStatus, SessionType};

static POSTGRES: OnceCell<(ContainerAsync<Postgres>, String)> = OnceCell::const_new();

/// Connection URL of the shared container
async fn postgres_url() -> String {
    let (_, url) = POSTGRES
        .get_or_init(|| async {
            let container = Postgres::default()
                .with_user("linguabook")
                .with_password("linguabook_test")
                .with_db_name("linguabook_test")
                .with_tag("16-alpine")
                .start()
                .await
                .expect("Failed to start PostgreSQL container");

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();
            let url = format!(
                "postgres://linguabook:linguabook_test@{}:{}/linguabook_test",
                host, port
            );

            (container, url)
        })
        .await;

    url.clone()
}

/// Migrated pool on the shared container
pub async fn pool() -> PgPool {
    let pool = PgPool::connect(&postgres_url().await)
        .await
        .expect("Failed to connect to test database");

    crate::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn insert_session(
    pool: &PgPool,
    session_type: SessionType,
    scheduled_at: DateTime<Utc>,
    max_participants: i32,
    current_participants: i32,
) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO sessions (title, scheduled_at, duration_minutes, max_participants,
                              current_participants, session_type)
        VALUES ('Test session', $1, 60, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(scheduled_at)
    .bind(max_participants)
    .bind(current_participants)
    .bind(session_type.as_str())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_booking(
    pool: &PgPool,
    user_id: Uuid,
    session_id: Uuid,
    status: BookingStatus,
) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO bookings (user_id, session_id, status)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(session_id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_session_active(pool: &PgPool, session_id: Uuid, is_active: bool) {
    sqlx::query("UPDATE sessions SET is_active = $2 WHERE id = $1")
        .bind(session_id)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
}
