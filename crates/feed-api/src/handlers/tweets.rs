//! Tweet handlers
//!
//! Endpoints for posting, listing, liking, and searching tweets.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use feed_service::{
    CreateTweetRequest, LikeResponse, LikeTweetRequest, TweetCreatedResponse, TweetResponse,
    TweetService,
};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Post a new tweet
///
/// POST /api/tweets
pub async fn create_tweet(
    State(state): State<AppState>,
    Json(request): Json<CreateTweetRequest>,
) -> ApiResult<Created<Json<TweetCreatedResponse>>> {
    let service = TweetService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List the whole feed, newest first
///
/// GET /api/tweets
pub async fn list_tweets(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TweetResponse>>> {
    let service = TweetService::new(state.service_context());
    let tweets = service.list().await?;
    Ok(Json(tweets))
}

/// Like a tweet
///
/// POST /api/tweets/:tweet_id/like
pub async fn like_tweet(
    State(state): State<AppState>,
    Path(tweet_id): Path<i64>,
    Json(request): Json<LikeTweetRequest>,
) -> ApiResult<Json<LikeResponse>> {
    let service = TweetService::new(state.service_context());
    let response = service.like(tweet_id, request).await?;
    Ok(Json(response))
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Search tweets by content or author username substring
///
/// GET /api/tweets/search?query=...
pub async fn search_tweets(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<TweetResponse>>> {
    let service = TweetService::new(state.service_context());
    let tweets = service.search(params.query).await?;
    Ok(Json(tweets))
}
