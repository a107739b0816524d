//! Tweet entity <-> model mappers

use feed_core::entities::{Tweet, TweetWithAuthor};

use crate::models::{TweetModel, TweetWithAuthorModel};

/// Convert TweetModel to Tweet entity
impl From<TweetModel> for Tweet {
    fn from(model: TweetModel) -> Self {
        Tweet {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Convert TweetWithAuthorModel to TweetWithAuthor entity
impl From<TweetWithAuthorModel> for TweetWithAuthor {
    fn from(model: TweetWithAuthorModel) -> Self {
        TweetWithAuthor {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
            username: model.username,
        }
    }
}
