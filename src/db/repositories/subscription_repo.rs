//! Subscription repository

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Subscription, SubscriptionStatus},
};

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: Uuid,
    user_id: Uuid,
    plan: String,
    status: String,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = AppError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: row.id,
            user_id: row.user_id,
            plan: row.plan.parse()?,
            status: row.status.parse()?,
        })
    }
}

/// Repository for subscription database operations
pub struct SubscriptionRepository;

impl SubscriptionRepository {
    /// Find the user's active subscription, if any
    pub async fn find_active_by_user(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Option<Subscription>> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT id, user_id, plan, status
            FROM subscriptions
            WHERE user_id = $1 AND status = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(SubscriptionStatus::Active.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(Subscription::try_from).transpose()
    }
}
