// src/modules/profile/application/ports/outgoing/profile_query.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::{PublicIdentity, UserId};
use crate::profile::domain::Profile;

/// A profile joined with the public fields of its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: Option<PublicIdentity>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_owner(&self, owner: UserId) -> Result<Option<ProfileView>, ProfileQueryError>;

    /// Every profile, oldest first. Not paginated.
    async fn list_all(&self) -> Result<Vec<ProfileView>, ProfileQueryError>;
}
