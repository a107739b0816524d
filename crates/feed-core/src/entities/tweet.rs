//! Tweet entity - a posted message

use chrono::{DateTime, Utc};

/// Tweet entity. Immutable once created; `created_at` is the feed ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A tweet joined with its author's username, as returned by the feed and
/// search queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetWithAuthor {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
}
