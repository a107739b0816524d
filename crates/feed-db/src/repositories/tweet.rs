//! PostgreSQL implementation of TweetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Tweet, TweetWithAuthor};
use feed_core::traits::{RepoResult, TweetRepository};
use feed_core::DomainError;

use crate::models::{TweetModel, TweetWithAuthorModel};

use super::error::{map_constraint_violation, map_db_error};

/// PostgreSQL implementation of TweetRepository
#[derive(Clone)]
pub struct PgTweetRepository {
    pool: PgPool,
}

impl PgTweetRepository {
    /// Create a new PgTweetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, user_id: i64, content: &str) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO tweets (user_id, content)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::Database("unexpected unique violation on tweets".to_string()),
                || DomainError::MissingReference("User"),
            )
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tweet>> {
        let result = sqlx::query_as::<_, TweetModel>(
            r"
            SELECT id, user_id, content, created_at
            FROM tweets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tweet::from))
    }

    #[instrument(skip(self))]
    async fn list_with_authors(&self) -> RepoResult<Vec<TweetWithAuthor>> {
        let results = sqlx::query_as::<_, TweetWithAuthorModel>(
            r"
            SELECT tweets.id, tweets.user_id, tweets.content, tweets.created_at, users.username
            FROM tweets
            JOIN users ON tweets.user_id = users.id
            ORDER BY tweets.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TweetWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_with_authors(&self, query: &str) -> RepoResult<Vec<TweetWithAuthor>> {
        // An empty query produces the pattern "%%", which matches every row.
        let pattern = format!("%{query}%");

        let results = sqlx::query_as::<_, TweetWithAuthorModel>(
            r"
            SELECT tweets.id, tweets.user_id, tweets.content, tweets.created_at, users.username
            FROM tweets
            JOIN users ON tweets.user_id = users.id
            WHERE tweets.content ILIKE $1 OR users.username ILIKE $1
            ORDER BY tweets.created_at DESC
            ",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TweetWithAuthor::from).collect())
    }
}
