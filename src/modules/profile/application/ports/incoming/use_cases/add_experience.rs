use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::domain::{NewExperience, Profile};

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry: NewExperience,
    ) -> Result<Profile, ProfileUseCaseError>;
}
