//! Authentication service
//!
//! Handles user registration and login.

use tracing::{info, instrument, warn};

use feed_common::auth::{hash_password, verify_password};
use feed_common::{AppError, AppResult};

use crate::dto::{LoginRequest, RegisterRequest, RegisterResponse, UserResponse};

use super::context::ServiceContext;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Hashing runs on a blocking worker thread so concurrent requests keep
    /// making progress while the deliberately expensive hash computes.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(AppError::internal)??;

        let user_id = self
            .ctx
            .user_repo()
            .create(&request.username, &request.email, &password_hash)
            .await?;

        info!(user_id, "User registered successfully");

        Ok(RegisterResponse::new(user_id))
    }

    /// Login with email and password
    ///
    /// The user row (including the stored hash) is fetched in one round trip;
    /// the response type strips the hash structurally.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> AppResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::UserNotFound
            })?;

        let password = request.password;
        let stored_hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(AppError::internal)??;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidPassword);
        }

        info!(user_id = user.id, "User logged in successfully");

        Ok(UserResponse::from(&user))
    }
}
