//! Test fixtures for integration tests
//!
//! Request payloads with unique usernames/emails per invocation, since the
//! store enforces global uniqueness across test runs.

use serde::Serialize;
use uuid::Uuid;

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// A registration payload with unique username and email
    pub fn unique() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            username: format!("user_{id}"),
            email: format!("user_{id}@example.com"),
            password: "correct horse battery staple".to_string(),
        }
    }
}

/// Login payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Login payload matching a registration payload
    pub fn from_register(request: &RegisterRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
        }
    }
}

/// Tweet creation payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTweetRequest {
    pub user_id: i64,
    pub content: String,
}

/// Like payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: i64,
}
