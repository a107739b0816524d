//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::traits::{LikeRepository, RepoResult};
use feed_core::DomainError;

use super::error::map_constraint_violation;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn create(&self, user_id: i64, tweet_id: i64) -> RepoResult<()> {
        // No ON CONFLICT clause: a repeat like must be reported, not ignored.
        sqlx::query(
            r"
            INSERT INTO likes (user_id, tweet_id)
            VALUES ($1, $2)
            ",
        )
        .bind(user_id)
        .bind(tweet_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::AlreadyLiked,
                || DomainError::MissingReference("User or tweet"),
            )
        })?;

        Ok(())
    }
}
