//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors.
///
/// Repository implementations translate the store driver's typed constraint
/// signals into these variants; service code never inspects vendor error
/// codes or message text.
#[derive(Debug, Error)]
pub enum DomainError {
    // Uniqueness conflicts
    #[error("Username or email already exists")]
    DuplicateUser,

    #[error("Tweet already liked")]
    AlreadyLiked,

    // Referential integrity
    #[error("{0} does not exist")]
    MissingReference(&'static str),

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Check if this is a uniqueness-conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateUser | Self::AlreadyLiked)
    }

    /// Check if this is a referential-integrity error
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingReference(_))
    }
}
