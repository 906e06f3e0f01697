use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Permanently removes the user identity.
    /// Returns `UserNotFound` if no such user exists.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
