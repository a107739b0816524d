//! Route definitions
//!
//! The feed endpoints are mounted under /api; health probes live at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, tweets};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Feed API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/tweets", post(tweets::create_tweet).get(tweets::list_tweets))
        .route("/tweets/search", get(tweets::search_tweets))
        .route("/tweets/:tweet_id/like", post(tweets::like_tweet))
}
