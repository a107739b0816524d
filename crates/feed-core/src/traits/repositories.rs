//! Repository traits - storage contracts for the domain entities
//!
//! Each operation is a single store round trip; uniqueness and referential
//! integrity are enforced by the store and surface as `DomainError` variants.

use async_trait::async_trait;

use crate::entities::{Tweet, TweetWithAuthor, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Storage contract for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row and return the store-generated id.
    ///
    /// A username/email uniqueness violation surfaces as
    /// [`DomainError::DuplicateUser`].
    async fn create(&self, username: &str, email: &str, password_hash: &str) -> RepoResult<i64>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Fetch a user by email. The returned entity carries the password hash
    /// so that login needs exactly one round trip.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
}

/// Storage contract for tweets
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Insert a new tweet row and return the store-generated id.
    ///
    /// A foreign-key violation (unknown author) surfaces as
    /// [`DomainError::MissingReference`].
    async fn create(&self, user_id: i64, content: &str) -> RepoResult<i64>;

    /// Fetch a tweet by id.
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tweet>>;

    /// Fetch every tweet joined with its author's username, most recent first.
    async fn list_with_authors(&self) -> RepoResult<Vec<TweetWithAuthor>>;

    /// Fetch tweets whose content or author username case-insensitively
    /// contains `query`, most recent first. An empty query matches every row.
    async fn search_with_authors(&self, query: &str) -> RepoResult<Vec<TweetWithAuthor>>;
}

/// Storage contract for likes
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like for `(user_id, tweet_id)`.
    ///
    /// A repeat like surfaces as [`DomainError::AlreadyLiked`]; an unknown
    /// user or tweet as [`DomainError::MissingReference`].
    async fn create(&self, user_id: i64, tweet_id: i64) -> RepoResult<()>;
}
