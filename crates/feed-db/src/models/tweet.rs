//! Tweet database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the tweets table
#[derive(Debug, Clone, FromRow)]
pub struct TweetModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Tweet row joined with the author's username (from the feed/search queries)
#[derive(Debug, Clone, FromRow)]
pub struct TweetWithAuthorModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
}
