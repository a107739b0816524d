//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table.
///
/// The `password` column stores the Argon2 PHC hash string.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
