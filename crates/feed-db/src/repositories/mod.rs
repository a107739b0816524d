//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feed-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod like;
mod tweet;
mod user;

pub use like::PgLikeRepository;
pub use tweet::PgTweetRepository;
pub use user::PgUserRepository;
