//! Repository traits implemented by the storage layer

mod repositories;

pub use repositories::{LikeRepository, RepoResult, TweetRepository, UserRepository};
