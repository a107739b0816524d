//! Response DTOs for API endpoints
//!
//! Creation responses use camelCase keys (`userId`, `tweetId`); row-shaped
//! responses keep the store's snake_case column names.

use chrono::{DateTime, Utc};
use serde::Serialize;

use feed_core::entities::{TweetWithAuthor, User};

/// Registration success response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

impl RegisterResponse {
    pub fn new(user_id: i64) -> Self {
        Self {
            message: "User created successfully".to_string(),
            user_id,
        }
    }
}

/// Tweet creation success response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetCreatedResponse {
    pub message: String,
    pub tweet_id: i64,
}

impl TweetCreatedResponse {
    pub fn new(tweet_id: i64) -> Self {
        Self {
            message: "Tweet created successfully".to_string(),
            tweet_id,
        }
    }
}

/// Like success response
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub message: String,
}

impl LikeResponse {
    pub fn new() -> Self {
        Self {
            message: "Tweet liked successfully".to_string(),
        }
    }
}

impl Default for LikeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// User record returned by login.
///
/// There is deliberately no password field on this type, so the stored hash
/// cannot leak through any serialization path.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// Tweet row joined with its author's username, as listed by the feed and
/// search endpoints
#[derive(Debug, Clone, Serialize)]
pub struct TweetResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
}

impl From<TweetWithAuthor> for TweetResponse {
    fn from(tweet: TweetWithAuthor) -> Self {
        Self {
            id: tweet.id,
            user_id: tweet.user_id,
            content: tweet.content,
            created_at: tweet.created_at,
            username: tweet.username,
        }
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ok" } else { "degraded" }.to_string(),
            database,
        }
    }
}
