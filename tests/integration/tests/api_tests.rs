//! API integration tests
//!
//! These tests require a running PostgreSQL instance and the
//! DATABASE_URL environment variable.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{DateTime, Utc};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::Value;

/// Register a unique user and return its id plus the payload used
async fn register_user(server: &TestServer) -> (i64, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/register", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    (body["userId"].as_i64().unwrap(), request)
}

/// Post a tweet for `user_id` and return the new tweet id
async fn post_tweet(server: &TestServer, user_id: i64, content: &str) -> i64 {
    let request = CreateTweetRequest {
        user_id,
        content: content.to_string(),
    };
    let response = server.post("/api/tweets", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    body["tweetId"].as_i64().unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["database"], true);
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["message"], "User created successfully");
    assert!(body["userId"].is_i64());
}

#[tokio::test]
async fn test_register_returns_fresh_ids() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first_id, _) = register_user(&server).await;
    let (second_id, _) = register_user(&server).await;

    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, request) = register_user(&server).await;

    // Same email, different username
    let mut duplicate = request.clone();
    duplicate.username = format!("other_{}", duplicate.username);
    let response = server.post("/api/register", &duplicate).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"], "Username or email already exists");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, request) = register_user(&server).await;

    // Same username, different email
    let mut duplicate = request.clone();
    duplicate.email = format!("other_{}", duplicate.email);
    let response = server.post("/api/register", &duplicate).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"], "Username or email already exists");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, request) = register_user(&server).await;

    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/login", &login).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["id"].as_i64(), Some(user_id));
    assert_eq!(body["username"], request.username);
    assert_eq!(body["email"], request.email);
    // The stored hash must never appear in the response
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains(&request.password));
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, request) = register_user(&server).await;

    let login = LoginRequest {
        email: request.email,
        password: "not the password".to_string(),
    };
    let response = server.post("/api/login", &login).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: "nonexistent@example.invalid".to_string(),
        password: "whatever".to_string(),
    };

    let response = server.post("/api/login", &login).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"], "User not found");
}

// ============================================================================
// Tweet Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_tweets() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, request) = register_user(&server).await;

    let contents = ["first tweet", "second tweet", "third tweet"];
    for content in contents {
        post_tweet(&server, user_id, content).await;
    }

    let response = server.get("/api/tweets").await.unwrap();
    let feed: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let mine: Vec<_> = feed
        .iter()
        .filter(|t| t["user_id"].as_i64() == Some(user_id))
        .collect();
    assert_eq!(mine.len(), contents.len());
    assert!(mine.iter().all(|t| t["username"] == request.username));

    // Newest first across the whole feed
    let timestamps: Vec<DateTime<Utc>> = feed
        .iter()
        .map(|t| t["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    for pair in timestamps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_created_tweet_roundtrips_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, _) = register_user(&server).await;

    let content = format!("exact content {user_id}");
    let tweet_id = post_tweet(&server, user_id, &content).await;

    let response = server.get("/api/tweets").await.unwrap();
    let feed: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = feed
        .iter()
        .find(|t| t["id"].as_i64() == Some(tweet_id))
        .expect("created tweet not in feed");
    assert_eq!(row["content"], content.as_str());
    assert_eq!(row["user_id"].as_i64(), Some(user_id));
}

#[tokio::test]
async fn test_create_tweet_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateTweetRequest {
        user_id: -1,
        content: "ghost tweet".to_string(),
    };

    let response = server.post("/api/tweets", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"], "User does not exist");
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_and_like_again() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, _) = register_user(&server).await;
    let tweet_id = post_tweet(&server, user_id, "like me").await;
    let other_id = post_tweet(&server, user_id, "like me too").await;

    let like = LikeRequest { user_id };

    // First like succeeds
    let response = server
        .post(&format!("/api/tweets/{tweet_id}/like"), &like)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Tweet liked successfully");

    // Second like on the same tweet is rejected
    let response = server
        .post(&format!("/api/tweets/{tweet_id}/like"), &like)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"], "Tweet already liked");

    // A distinct tweet by the same user is still likeable
    let response = server
        .post(&format!("/api/tweets/{other_id}/like"), &like)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_like_unknown_tweet() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, _) = register_user(&server).await;

    let response = server
        .post("/api/tweets/-1/like", &LikeRequest { user_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_content_username_and_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, request) = register_user(&server).await;

    let marker = format!("needle{user_id}");
    let hit = post_tweet(&server, user_id, &format!("hidden {marker} here")).await;
    post_tweet(&server, user_id, "plain tweet").await;

    // Content substring, case-insensitively
    let response = server
        .get(&format!("/api/tweets/search?query={}", marker.to_uppercase()))
        .await
        .unwrap();
    let results: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"].as_i64(), Some(hit));

    // Username substring returns all of that user's tweets
    let response = server
        .get(&format!("/api/tweets/search?query={}", request.username))
        .await
        .unwrap();
    let results: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.len(), 2);

    // An absent query matches every row
    let response = server.get("/api/tweets/search").await.unwrap();
    let results: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.len() >= 2);
}
