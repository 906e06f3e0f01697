// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::domain::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("profile not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Write side of the profile store. One profile per owner.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_owner(&self, owner: UserId)
        -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Inserts the aggregate, or replaces the one already stored for its owner.
    async fn save(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError>;

    /// Returns `false` when the owner had no profile.
    async fn delete_by_owner(&self, owner: UserId) -> Result<bool, ProfileRepositoryError>;
}
