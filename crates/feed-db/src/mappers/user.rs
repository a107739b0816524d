//! User entity <-> model mapper

use feed_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password,
            created_at: model.created_at,
        }
    }
}
