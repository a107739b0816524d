//! Tweet service
//!
//! Handles posting, listing, liking, and searching tweets. Every operation is
//! one store round trip; the store's constraints enforce uniqueness and
//! referential integrity.

use tracing::{info, instrument};

use feed_common::AppResult;

use crate::dto::{
    CreateTweetRequest, LikeResponse, LikeTweetRequest, TweetCreatedResponse, TweetResponse,
};

use super::context::ServiceContext;

/// Tweet service
pub struct TweetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TweetService<'a> {
    /// Create a new TweetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new tweet
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn create(&self, request: CreateTweetRequest) -> AppResult<TweetCreatedResponse> {
        let tweet_id = self
            .ctx
            .tweet_repo()
            .create(request.user_id, &request.content)
            .await?;

        info!(tweet_id, "Tweet created");

        Ok(TweetCreatedResponse::new(tweet_id))
    }

    /// Fetch the whole feed, newest first, each entry carrying its author's
    /// username
    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<TweetResponse>> {
        let tweets = self.ctx.tweet_repo().list_with_authors().await?;

        Ok(tweets.into_iter().map(TweetResponse::from).collect())
    }

    /// Like a tweet; a repeat like is rejected, not silently accepted
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn like(&self, tweet_id: i64, request: LikeTweetRequest) -> AppResult<LikeResponse> {
        self.ctx
            .like_repo()
            .create(request.user_id, tweet_id)
            .await?;

        info!(tweet_id, "Tweet liked");

        Ok(LikeResponse::new())
    }

    /// Search tweets by content or author username substring. An absent or
    /// empty query matches every row.
    #[instrument(skip(self))]
    pub async fn search(&self, query: Option<String>) -> AppResult<Vec<TweetResponse>> {
        let query = query.unwrap_or_default();
        let tweets = self.ctx.tweet_repo().search_with_authors(&query).await?;

        Ok(tweets.into_iter().map(TweetResponse::from).collect())
    }
}
