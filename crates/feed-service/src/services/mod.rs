//! Business logic services

pub mod auth;
pub mod context;
pub mod tweet;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::ServiceContext;
pub use tweet::TweetService;
