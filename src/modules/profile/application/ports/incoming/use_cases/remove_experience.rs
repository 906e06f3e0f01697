use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::domain::Profile;

#[async_trait]
pub trait RemoveExperienceUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, entry_id: &str)
        -> Result<Profile, ProfileUseCaseError>;
}
