//! User entity - a registered account

use chrono::{DateTime, Utc};

/// User entity.
///
/// `password_hash` holds the Argon2 PHC string and must never cross the API
/// boundary; response DTOs omit the field entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
