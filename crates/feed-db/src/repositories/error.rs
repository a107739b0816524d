//! Error handling utilities for repositories
//!
//! Translates SQLx's typed constraint signals into `DomainError` variants so
//! that service code never depends on one store vendor's error encoding.

use feed_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Check for unique and foreign-key violations, with a named error for each.
///
/// Uniqueness takes precedence; any other failure falls through to
/// [`DomainError::Database`].
pub fn map_constraint_violation<U, F>(e: SqlxError, on_unique: U, on_fk: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::Database(e.to_string())
}
