//! Data transfer objects for API requests and responses
//!
//! Request DTOs deserialize API inputs; response DTOs serialize API outputs.
//! Input is passed through to the store as-is (the store's constraints are
//! the validation layer).

pub mod requests;
pub mod responses;

pub use requests::{CreateTweetRequest, LikeTweetRequest, LoginRequest, RegisterRequest};
pub use responses::{
    HealthResponse, LikeResponse, ReadinessResponse, RegisterResponse, TweetCreatedResponse,
    TweetResponse, UserResponse,
};
