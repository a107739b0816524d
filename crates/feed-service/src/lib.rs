//! # feed-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateTweetRequest, HealthResponse, LikeResponse, LikeTweetRequest, LoginRequest,
    ReadinessResponse, RegisterRequest, RegisterResponse, TweetCreatedResponse, TweetResponse,
    UserResponse,
};
pub use services::{AuthService, ServiceContext, TweetService};
