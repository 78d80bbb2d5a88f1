//! Profile repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Profile};

/// Repository for learner profiles
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find profile by user ID
    pub async fn find_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"SELECT user_id, points FROM profiles WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
