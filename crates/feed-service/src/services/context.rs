//! Service context - dependency container for services
//!
//! Holds the connection pool and repositories needed by services. Constructed
//! once at startup and injected into every handler; never a global.

use std::sync::Arc;

use feed_core::traits::{LikeRepository, TweetRepository, UserRepository};
use feed_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    user_repo: Arc<dyn UserRepository>,
    tweet_repo: Arc<dyn TweetRepository>,
    like_repo: Arc<dyn LikeRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        tweet_repo: Arc<dyn TweetRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            tweet_repo,
            like_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the tweet repository
    pub fn tweet_repo(&self) -> &dyn TweetRepository {
        self.tweet_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}
